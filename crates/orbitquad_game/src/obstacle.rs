use orbitquad_common::{Color, FrameBuffer};
use rand::Rng;

use crate::config::GameConfig;
use crate::raster::draw_quad;

/// Spawn pattern picked on every respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trajectory {
    /// Straight up, beside the screen center.
    Vertical,
    /// From a side edge, upward toward the opposite side.
    Diagonal,
}

/// The single square hazard. It enters from the bottom edge and is
/// respawned in place whenever it leaves the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub dx: i32,
    /// Upward speed; positive values move toward `y = 0`.
    pub dy: i32,
    pub is_lethal: bool,
}

impl Obstacle {
    pub fn new(size: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            size,
            dx: 0,
            dy: 0,
            is_lethal: false,
        }
    }

    /// Off the top, off the left, or past the right edge. Leaving through
    /// the bottom is never reported.
    pub fn needs_respawn(&self, screen_width: i32) -> bool {
        self.y + self.size < 0 || self.x + self.size < 0 || self.x > screen_width
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, is_lethal: bool, rng: &mut R, config: &GameConfig) {
        let trajectory = if rng.gen::<bool>() {
            Trajectory::Vertical
        } else {
            Trajectory::Diagonal
        };
        let from_left = rng.gen::<bool>();
        self.launch(trajectory, from_left, config);
        self.is_lethal = is_lethal;
        log::debug!(
            "Obstacle respawned: {:?} at x={} dx={} dy={} lethal={}",
            trajectory,
            self.x,
            self.dx,
            self.dy,
            self.is_lethal
        );
    }

    /// Places the obstacle on the bottom edge with the given pattern.
    pub fn launch(&mut self, trajectory: Trajectory, from_left: bool, config: &GameConfig) {
        match trajectory {
            Trajectory::Vertical => {
                let offset = if from_left {
                    -config.spawn_offset
                } else {
                    config.spawn_offset
                };
                self.x = config.screen_width / 2 + offset;
                self.dx = 0;
                self.dy = config.vertical_speed;
            }
            Trajectory::Diagonal => {
                if from_left {
                    self.x = -self.size;
                    self.dx = config.diagonal_dx;
                } else {
                    self.x = config.screen_width;
                    self.dx = -config.diagonal_dx;
                }
                self.dy = config.diagonal_dy;
            }
        }
        self.y = config.screen_height;
    }

    pub fn step(&mut self) {
        self.x += self.dx;
        self.y -= self.dy;
    }

    pub fn color(&self) -> Color {
        if self.is_lethal {
            Color::RED
        } else {
            Color::WHITE
        }
    }

    /// Moves, respawns with a random lethality when off the field, then
    /// renders.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        screen: &mut FrameBuffer,
        rng: &mut R,
        config: &GameConfig,
    ) {
        self.step();
        if self.needs_respawn(config.screen_width) {
            let is_lethal = rng.gen::<bool>();
            self.respawn(is_lethal, rng, config);
        }
        draw_quad(screen, self.x, self.y, self.size, self.color());
    }
}
