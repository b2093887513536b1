use std::time::Instant;

use orbitquad_common::{Color, FrameBuffer, Input, Key};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::geometry::boxes_overlap;
use crate::limiter::FrameLimiter;
use crate::obstacle::Obstacle;
use crate::orbit::OrbitingPair;


pub const QUIT_KEY: Key = Key::Escape;
pub const RESTART_KEY: Key = Key::R;
pub const TOGGLE_KEY: Key = Key::Space;

/// All mutable game state: the orbiting pair, the obstacle, the game-over
/// flag, the frame limiter and the direction-toggle cooldown.
pub struct GameWorld {
    config: GameConfig,
    pair: OrbitingPair,
    obstacle: Obstacle,
    is_ended: bool,
    limiter: FrameLimiter,
    /// Seconds accumulated since the last direction change.
    time_since_toggle: f32,
    exit_requested: bool,
    rng: StdRng,
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameWorld {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            pair: OrbitingPair::from_config(&config),
            obstacle: Obstacle::new(config.quad_size),
            is_ended: false,
            limiter: FrameLimiter::new(config.max_fps),
            time_since_toggle: 0.0,
            exit_requested: false,
            rng,
            config,
        }
    }

    pub fn initialize(&mut self) {
        let is_lethal = self.rng.gen::<bool>();
        self.obstacle.respawn(is_lethal, &mut self.rng, &self.config);
        self.is_ended = false;
        self.time_since_toggle = 0.0;
        log::info!(
            "World initialized: {}x{} @ {} fps",
            self.config.screen_width,
            self.config.screen_height,
            self.config.max_fps
        );
    }

    pub fn finalize(&mut self) {
        log::info!("World finalized");
    }

    /// Input and logic step. `dt` is the time since the previous call,
    /// in seconds.
    pub fn act(&mut self, dt: f32, input: &dyn Input) {
        if input.is_key_pressed(QUIT_KEY) && !self.exit_requested {
            log::info!("Quit requested");
            self.exit_requested = true;
        }

        if input.is_key_pressed(RESTART_KEY) {
            self.restart();
        }

        if self.is_ended {
            return;
        }

        if input.is_key_pressed(TOGGLE_KEY) {
            // While held under cooldown no time accumulates, so holding the
            // key flips the direction at most once.
            if self.time_since_toggle < self.config.toggle_cooldown {
                return;
            }
            self.pair.change_direction();
            log::debug!("Direction changed: rotate_left={}", self.pair.rotate_left);
            self.time_since_toggle = 0.0;
            return;
        }

        self.time_since_toggle += dt;
    }

    /// Respawns the obstacle with its current lethality and leaves the
    /// game-over state, whether or not the game had ended.
    pub fn restart(&mut self) {
        let is_lethal = self.obstacle.is_lethal;
        self.obstacle.respawn(is_lethal, &mut self.rng, &self.config);
        if self.is_ended {
            log::info!("Game restarted");
        }
        self.is_ended = false;
        self.time_since_toggle = 0.0;
    }

    /// Render step at the current wall-clock time. Returns whether a frame
    /// was produced.
    pub fn draw(&mut self, screen: &mut FrameBuffer) -> bool {
        self.draw_at(Instant::now(), screen)
    }

    /// Render step at `now`. Skipped entirely after game over or when the
    /// frame budget has not elapsed yet.
    pub fn draw_at(&mut self, now: Instant, screen: &mut FrameBuffer) -> bool {
        if self.is_ended {
            return false;
        }
        if !self.limiter.try_begin(now) {
            log::trace!("Frame skipped");
            return false;
        }

        screen.clear(Color::BLACK);
        self.pair.draw(screen, self.config.center());
        self.obstacle.draw(screen, &mut self.rng, &self.config);
        self.resolve_collision();
        true
    }

    /// Whether either circle of the pair touches the obstacle.
    pub fn colliding(&self) -> bool {
        let quad = &self.obstacle;
        [self.pair.first, self.pair.second]
            .into_iter()
            .any(|(x, y)| boxes_overlap(x, y, self.pair.diameter, quad.x, quad.y, quad.size))
    }

    fn resolve_collision(&mut self) {
        if !self.colliding() {
            return;
        }
        if self.obstacle.is_lethal {
            log::info!("Game over: hit a lethal obstacle");
            self.is_ended = true;
        } else {
            let is_lethal = self.rng.gen::<bool>();
            self.obstacle.respawn(is_lethal, &mut self.rng, &self.config);
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_ended(&self) -> bool {
        self.is_ended
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn time_since_toggle(&self) -> f32 {
        self.time_since_toggle
    }

    pub fn pair(&self) -> &OrbitingPair {
        &self.pair
    }

    pub fn pair_mut(&mut self) -> &mut OrbitingPair {
        &mut self.pair
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn obstacle_mut(&mut self) -> &mut Obstacle {
        &mut self.obstacle
    }
}
