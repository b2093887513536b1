use crate::framebuffer::FrameBuffer;
use crate::input::Input;

/// Lifecycle a frontend drives once per host tick: `act` before `draw`.
pub trait App {
    fn init(&mut self);
    fn act(&mut self, dt: f32, input: &dyn Input);
    fn draw(&mut self, screen: &mut FrameBuffer);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
