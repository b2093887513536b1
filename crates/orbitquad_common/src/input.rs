use crate::key::{Key, MouseButton};

/// Polled input queries a host exposes to the game during `act`.
pub trait Input {
    fn is_key_pressed(&self, key: Key) -> bool;
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool;
    fn cursor_x(&self) -> i32;
    fn cursor_y(&self) -> i32;
    fn is_window_active(&self) -> bool;
}

/// Level-triggered input snapshot. Frontends feed it from their event
/// queue and hand it to [`App::act`](crate::App::act) every tick.
#[derive(Debug, Clone)]
pub struct InputState {
    keys: [bool; Key::COUNT],
    mouse_buttons: [bool; MouseButton::COUNT],
    cursor: (i32, i32),
    window_active: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys: [false; Key::COUNT],
            mouse_buttons: [false; MouseButton::COUNT],
            cursor: (0, 0),
            window_active: true,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: Key, is_down: bool) {
        // Unmapped host keys arrive as `Key::None` and are never reported.
        if key == Key::None {
            return;
        }
        self.keys[key.index()] = is_down;
    }

    pub fn set_mouse_button(&mut self, button: MouseButton, is_down: bool) {
        self.mouse_buttons[button.index()] = is_down;
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    pub fn set_window_active(&mut self, active: bool) {
        if self.window_active != active {
            log::debug!("Window active: {}", active);
        }
        self.window_active = active;
    }

    /// Drops every held key and button, e.g. when focus is lost and the
    /// matching key-up events will never arrive.
    pub fn release_all(&mut self) {
        self.keys = [false; Key::COUNT];
        self.mouse_buttons = [false; MouseButton::COUNT];
    }
}

impl Input for InputState {
    fn is_key_pressed(&self, key: Key) -> bool {
        key != Key::None && self.keys[key.index()]
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons[button.index()]
    }

    fn cursor_x(&self) -> i32 {
        self.cursor.0
    }

    fn cursor_y(&self) -> i32 {
        self.cursor.1
    }

    fn is_window_active(&self) -> bool {
        self.window_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_level_triggered() {
        let mut input = InputState::new();
        assert!(!input.is_key_pressed(Key::Space));

        input.set_key(Key::Space, true);
        assert!(input.is_key_pressed(Key::Space));
        assert!(input.is_key_pressed(Key::Space));
        assert!(!input.is_key_pressed(Key::R));

        input.set_key(Key::Space, false);
        assert!(!input.is_key_pressed(Key::Space));
    }

    #[test]
    fn unmapped_key_is_never_pressed() {
        let mut input = InputState::new();
        input.set_key(Key::None, true);
        assert!(!input.is_key_pressed(Key::None));
    }

    #[test]
    fn mouse_and_cursor_are_tracked() {
        let mut input = InputState::new();
        input.set_mouse_button(MouseButton::Right, true);
        input.set_cursor(12, -3);

        assert!(input.is_mouse_button_pressed(MouseButton::Right));
        assert!(!input.is_mouse_button_pressed(MouseButton::Left));
        assert_eq!((input.cursor_x(), input.cursor_y()), (12, -3));
    }

    #[test]
    fn release_all_clears_keys_and_buttons() {
        let mut input = InputState::new();
        input.set_key(Key::Escape, true);
        input.set_mouse_button(MouseButton::Left, true);
        input.set_window_active(false);
        input.release_all();

        assert!(!input.is_key_pressed(Key::Escape));
        assert!(!input.is_mouse_button_pressed(MouseButton::Left));
        assert!(!input.is_window_active());
    }
}
