use crate::input::events::InputEvent;

/// The status of window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user asked to close the window.
    Closed,
    /// The window gained focus of user input.
    GainFocus,
    /// The window lost focus of user input.
    LostFocus,
    /// The size of framebuffer has changed, in physical pixels.
    Resized(u32, u32),
}

/// The enumerations of all events that come from the window or various kinds of
/// user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Window(WindowEvent),
    InputDevice(InputEvent),
}
