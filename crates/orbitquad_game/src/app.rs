use orbitquad_common::app::App;
use orbitquad_common::framebuffer::FrameBuffer;
use orbitquad_common::input::Input;

use crate::config::GameConfig;
use crate::world::GameWorld;

/// Frontend-facing wrapper around [`GameWorld`].
///
/// This type implements the shared `App` trait so that any host (the SDL2
/// frontend, or a headless driver in tests) can run the game.
#[derive(Default)]
pub struct OrbitQuadApp {
    pub world: GameWorld,
}

impl OrbitQuadApp {
    pub fn new(config: GameConfig) -> Self {
        Self {
            world: GameWorld::new(config),
        }
    }
}

impl App for OrbitQuadApp {
    fn init(&mut self) {
        log::info!("OrbitQuad init");
        self.world.initialize();
    }

    fn act(&mut self, dt: f32, input: &dyn Input) {
        self.world.act(dt, input);
    }

    fn draw(&mut self, screen: &mut FrameBuffer) {
        self.world.draw(screen);
    }

    fn should_exit(&self) -> bool {
        self.world.exit_requested()
    }

    fn exit(&mut self) {
        self.world.finalize();
        log::info!("OrbitQuad exit");
    }

    fn width(&self) -> u32 {
        self.world.config().screen_width as u32
    }

    fn height(&self) -> u32 {
        self.world.config().screen_height as u32
    }

    fn scale(&self) -> u32 {
        self.world.config().scale
    }

    fn title(&self) -> String {
        "OrbitQuad".to_string()
    }
}
