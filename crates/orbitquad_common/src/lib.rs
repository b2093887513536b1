pub mod app;
pub mod color;
pub mod framebuffer;
pub mod input;
pub mod key;

pub use app::App;
pub use color::Color;
pub use framebuffer::FrameBuffer;
pub use input::{Input, InputState};
pub use key::{Key, MouseButton};
