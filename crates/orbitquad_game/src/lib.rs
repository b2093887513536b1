pub mod app;
pub mod config;
pub mod geometry;
pub mod limiter;
pub mod obstacle;
pub mod orbit;
pub mod raster;
pub mod world;

pub use app::OrbitQuadApp;
pub use config::GameConfig;
pub use obstacle::Obstacle;
pub use orbit::OrbitingPair;
pub use world::GameWorld;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 1024;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 768;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;
