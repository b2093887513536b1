use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::{Event, WindowEvent};
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

pub use orbitquad_common;
pub use orbitquad_common::app::App;
pub use sdl2;

use orbitquad_common::framebuffer::FrameBuffer;
use orbitquad_common::input::InputState;
use orbitquad_common::key::{Key, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
    /// Pause between host ticks. The game's own limiter decides when a
    /// frame is rendered, so presentation is not synced to vblank.
    #[builder(default = Duration::from_micros(500))]
    pub tick_sleep: Duration,
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
            tick_sleep,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;
        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_streaming(map_pixel_format(pixel_format), width, height)?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut frame = FrameBuffer::new(width as usize, height as usize);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];
        let mut input = InputState::new();
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        log::info!(
            "Window '{}' created: {}x{} at scale {}",
            title,
            width,
            height,
            scale
        );

        app.init();
        let mut last_tick = Instant::now();
        loop {
            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        log::info!("Window closed");
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        ..
                    } => input.set_key(map_keycode(keycode), true),
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => input.set_key(map_keycode(keycode), false),
                    Event::MouseButtonDown { mouse_btn, .. } => {
                        if let Some(button) = map_mouse_button(mouse_btn) {
                            input.set_mouse_button(button, true);
                        }
                    }
                    Event::MouseButtonUp { mouse_btn, .. } => {
                        if let Some(button) = map_mouse_button(mouse_btn) {
                            input.set_mouse_button(button, false);
                        }
                    }
                    Event::MouseMotion { x, y, .. } => {
                        let scale = scale.max(1) as i32;
                        input.set_cursor(x / scale, y / scale);
                    }
                    Event::Window { win_event, .. } => match win_event {
                        WindowEvent::FocusGained => input.set_window_active(true),
                        WindowEvent::FocusLost => {
                            input.set_window_active(false);
                            input.release_all();
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }

            let now = Instant::now();
            let dt = now.duration_since(last_tick).as_secs_f32();
            last_tick = now;

            app.act(dt, &input);
            if app.should_exit() {
                log::info!("Exit requested by game");
                app.exit();
                break;
            }
            app.draw(&mut frame);

            frame.write_rgb24(&mut screen_state);
            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();
            std::thread::sleep(tick_sleep);
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_mouse_button(button: sdl2::mouse::MouseButton) -> Option<MouseButton> {
    match button {
        sdl2::mouse::MouseButton::Left => Some(MouseButton::Left),
        sdl2::mouse::MouseButton::Right => Some(MouseButton::Right),
        _ => None,
    }
}

pub fn map_keycode(keycode: sdl2::keyboard::Keycode) -> Key {
    use sdl2::keyboard::Keycode;

    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Key::Num1,
        Keycode::Num2 | Keycode::Kp2 => Key::Num2,
        Keycode::Num3 | Keycode::Kp3 => Key::Num3,
        Keycode::Num4 | Keycode::Kp4 => Key::Num4,
        Keycode::Q => Key::Q,
        Keycode::W => Key::W,
        Keycode::E => Key::E,
        Keycode::R => Key::R,
        Keycode::A => Key::A,
        Keycode::S => Key::S,
        Keycode::D => Key::D,
        Keycode::F => Key::F,
        Keycode::Z => Key::Z,
        Keycode::X => Key::X,
        Keycode::C => Key::C,
        Keycode::V => Key::V,
        Keycode::P => Key::P,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Space => Key::Space,
        Keycode::Return | Keycode::KpEnter => Key::Enter,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Keycode;

    #[test]
    fn game_keys_are_mapped() {
        assert_eq!(map_keycode(Keycode::Escape), Key::Escape);
        assert_eq!(map_keycode(Keycode::Space), Key::Space);
        assert_eq!(map_keycode(Keycode::R), Key::R);
        assert_eq!(map_keycode(Keycode::F12), Key::None);
    }

    #[test]
    fn only_primary_mouse_buttons_are_mapped() {
        assert_eq!(
            map_mouse_button(sdl2::mouse::MouseButton::Left),
            Some(MouseButton::Left)
        );
        assert_eq!(map_mouse_button(sdl2::mouse::MouseButton::Middle), None);
    }
}
