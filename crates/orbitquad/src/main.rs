fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = orbitquad::parse_args(std::env::args().skip(1))?;
    match config.seed {
        Some(seed) => log::info!("Starting OrbitQuad at {} fps, seed {}", config.max_fps, seed),
        None => log::info!("Starting OrbitQuad at {} fps", config.max_fps),
    }

    orbitquad::run(config)
}
