//! Keyboard state tracking.
//!
//! The window backend translates platform events into `InputEvent`s, and the
//! `InputSystem` folds them into a per-frame view of the keyboard:
//!
//! ```rust,ignore
//! // Checks if a key is currently held down.
//! input.is_key_down(Key::Escape);
//!
//! // Checks if a key has been pressed down during the last frame.
//! input.is_key_press(Key::Escape);
//! ```
//!
//! Notes that the key code used here, are virtual keycode of physical keys, they don't
//! necessarily represent what's actually printed on the key cap.

pub mod events;
pub mod keyboard;

pub mod prelude {
    pub use super::events::InputEvent;
    pub use super::keyboard::Key;
    pub use super::InputSystem;
}

use self::events::InputEvent;
use self::keyboard::{Key, Keyboard};

/// The centralized state of all input devices.
#[derive(Debug, Default)]
pub struct InputSystem {
    keyboard: Keyboard,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            keyboard: Keyboard::new(),
        }
    }

    /// Forgets the per-frame press and release records. Keys held down stay down.
    #[inline]
    pub fn advance(&mut self) {
        self.keyboard.advance();
    }

    /// Resets all the device states, e.g. after the window lost focus and would never
    /// see the matching release events.
    #[inline]
    pub fn reset(&mut self) {
        self.keyboard.reset();
    }

    pub fn on_event(&mut self, v: InputEvent) {
        match v {
            InputEvent::KeyboardPressed { key } => self.keyboard.on_key_pressed(key),
            InputEvent::KeyboardReleased { key } => self.keyboard.on_key_released(key),
        }
    }

    /// Checks if a key is currently held down.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }

    /// Checks if a key has been pressed down during the last frame.
    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.keyboard.is_key_press(key)
    }

    /// Checks if a key has been released during the last frame.
    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.keyboard.is_key_release(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut input = InputSystem::new();
        input.on_event(InputEvent::KeyboardPressed { key: Key::Escape });
        assert!(input.is_key_down(Key::Escape));
        assert!(input.is_key_press(Key::Escape));

        input.advance();
        assert!(input.is_key_down(Key::Escape));
        assert!(!input.is_key_press(Key::Escape));

        input.on_event(InputEvent::KeyboardReleased { key: Key::Escape });
        assert!(!input.is_key_down(Key::Escape));
        assert!(input.is_key_release(Key::Escape));
    }

    #[test]
    fn reset() {
        let mut input = InputSystem::new();
        input.on_event(InputEvent::KeyboardPressed { key: Key::A });
        input.reset();
        assert!(!input.is_key_down(Key::A));
    }
}
