use anyhow::{ensure, Result};
use typed_builder::TypedBuilder;

use crate::{SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Every tunable of the game. Defaults reproduce the classic layout.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct GameConfig {
    #[builder(default = SCREEN_WIDTH as i32)]
    pub screen_width: i32,
    #[builder(default = SCREEN_HEIGHT as i32)]
    pub screen_height: i32,
    #[builder(default = SCREEN_SCALE)]
    pub scale: u32,
    #[builder(default = 60.0)]
    pub max_fps: f32,

    /// Rotation step of the orbiting pair per rendered frame.
    #[builder(default = 5)]
    pub degrees_per_frame: i32,
    /// Distance of each circle from the screen center.
    #[builder(default = 100)]
    pub orbit_radius: i32,
    #[builder(default = 30)]
    pub circle_diameter: i32,

    #[builder(default = 30)]
    pub quad_size: i32,
    /// Horizontal distance from center for vertically moving quads.
    #[builder(default = 80)]
    pub spawn_offset: i32,
    #[builder(default = 4)]
    pub vertical_speed: i32,
    #[builder(default = 4)]
    pub diagonal_dx: i32,
    #[builder(default = 3)]
    pub diagonal_dy: i32,

    /// Minimum time between two direction changes, in seconds.
    #[builder(default = 0.1)]
    pub toggle_cooldown: f32,

    /// Fixed RNG seed; `None` seeds from OS entropy.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen_width > 0 && self.screen_height > 0,
            "screen size must be positive, got {}x{}",
            self.screen_width,
            self.screen_height
        );
        ensure!(self.scale > 0, "scale must be positive");
        ensure!(
            self.max_fps.is_finite() && self.max_fps > 0.0,
            "max_fps must be positive, got {}",
            self.max_fps
        );
        ensure!(
            self.circle_diameter > 0 && self.quad_size > 0,
            "entity sizes must be positive"
        );
        ensure!(self.orbit_radius >= 0, "orbit radius must not be negative");
        ensure!(
            (0..=360).contains(&self.degrees_per_frame),
            "degrees_per_frame must be within 0..=360, got {}",
            self.degrees_per_frame
        );
        ensure!(
            self.vertical_speed >= 0 && self.diagonal_dx >= 0 && self.diagonal_dy >= 0,
            "spawn speeds must not be negative"
        );
        ensure!(
            self.spawn_offset.abs() <= self.screen_width / 2,
            "spawn offset {} exceeds half the screen width",
            self.spawn_offset
        );
        ensure!(
            self.toggle_cooldown >= 0.0,
            "toggle cooldown must not be negative"
        );
        Ok(())
    }

    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.screen_width / 2, self.screen_height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_layout() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 1024);
        assert_eq!(config.screen_height, 768);
        assert_eq!(config.max_fps, 60.0);
        assert_eq!(config.degrees_per_frame, 5);
        assert_eq!(config.orbit_radius, 100);
        assert_eq!(config.circle_diameter, 30);
        assert_eq!(config.quad_size, 30);
        assert_eq!(config.spawn_offset, 80);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
        assert_eq!(config.center(), (512, 384));
    }

    #[test]
    fn rejects_bad_values() {
        let config = GameConfig::builder().max_fps(0.0).build();
        assert!(config.validate().is_err());

        let config = GameConfig::builder().screen_width(0).build();
        assert!(config.validate().is_err());

        let config = GameConfig::builder().quad_size(-1).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn bounds_motion_parameters() {
        let config = GameConfig::builder().degrees_per_frame(i32::MAX).build();
        assert!(config.validate().is_err());
        let config = GameConfig::builder().degrees_per_frame(-1).build();
        assert!(config.validate().is_err());
        let config = GameConfig::builder().degrees_per_frame(360).build();
        assert!(config.validate().is_ok());

        let config = GameConfig::builder().vertical_speed(-4).build();
        assert!(config.validate().is_err());
        let config = GameConfig::builder().spawn_offset(600).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn seed_setter_strips_option() {
        let config = GameConfig::builder().seed(42).build();
        assert_eq!(config.seed, Some(42));
    }
}
