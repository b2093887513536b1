use anyhow::{bail, Context, Result};
use orbitquad_game::{GameConfig, OrbitQuadApp};
use orbitquad_sdl2::App;
use orbitquad_sdl2::{SdlContext, SdlInitInfo};

pub const USAGE: &str = "usage: orbitquad [max_fps] [seed]";

/// Builds a config from positional arguments: `[max_fps] [seed]`.
pub fn parse_args<I>(args: I) -> Result<GameConfig>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config = GameConfig::default();

    if let Some(fps) = args.next() {
        config.max_fps = fps
            .parse()
            .with_context(|| format!("invalid max_fps '{}'", fps))?;
    }
    if let Some(seed) = args.next() {
        let seed = seed
            .parse()
            .with_context(|| format!("invalid seed '{}'", seed))?;
        config.seed = Some(seed);
    }
    if let Some(extra) = args.next() {
        bail!("unexpected argument '{}'\n{}", extra, USAGE);
    }

    config.validate()?;
    Ok(config)
}

pub fn run(config: GameConfig) -> Result<()> {
    config.validate()?;
    let app = OrbitQuadApp::new(config);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_gives_defaults() {
        let config = parse_args(args(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn fps_and_seed() {
        let config = parse_args(args(&["30", "1234"])).unwrap();
        assert_eq!(config.max_fps, 30.0);
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_args(args(&["fast"])).is_err());
        assert!(parse_args(args(&["60", "-1"])).is_err());
        assert!(parse_args(args(&["0"])).is_err());
        assert!(parse_args(args(&["60", "1", "extra"])).is_err());
    }
}
