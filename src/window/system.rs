use std::os::raw::c_void;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::backends::{self, Visitor};
use super::events::Event;
use super::WindowParams;

/// Represents an OpenGL context and the window or environment around it.
pub struct WindowSystem {
    visitor: Box<dyn Visitor>,
    events: Vec<Event>,
    should_close: bool,
}

impl WindowSystem {
    /// Creates a new `WindowSystem` and initalize OpenGL context.
    pub fn new(params: WindowParams) -> Result<Self> {
        info!(
            "Creating window {:?} of {}x{} with OpenGL {}.{} core profile.",
            params.title, params.size.x, params.size.y, params.gl_version.0, params.gl_version.1
        );

        Ok(Self::from_visitor(backends::new(params)?))
    }

    /// Creates a new `WindowSystem` with headless context.
    pub fn headless(params: WindowParams) -> Self {
        Self::from_visitor(backends::new_headless(params.size))
    }

    pub fn from_visitor(visitor: Box<dyn Visitor>) -> Self {
        WindowSystem {
            visitor,
            events: Vec::new(),
            should_close: false,
        }
    }

    /// Returns true if someone has asked the window to close.
    #[inline]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    #[inline]
    pub fn set_should_close(&mut self, close: bool) {
        self.should_close = close;
    }

    /// Polls events from window, and returns the events received since the last poll.
    pub fn poll_events(&mut self) -> &[Event] {
        self.events.clear();
        self.visitor.poll_events(&mut self.events);
        &self.events
    }

    /// Swaps the buffers in case of double or triple buffering.
    ///
    /// **Warning**: if you enabled vsync, this function will block until the next time the screen
    /// is refreshed. However drivers can choose to override your vsync settings, which means that
    /// you can't know in advance whether swap_buffers will block or not.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }

    /// Set the context as the active context in this thread.
    #[inline]
    pub fn make_current(&self) -> Result<()> {
        self.visitor.make_current()
    }

    /// Returns true if this context is the current one in this thread.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.visitor.is_current()
    }

    /// Returns the size in *points* of the client area of the window.
    ///
    /// The client area is the content of the window, excluding the title bar and borders.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.visitor.dimensions()
    }

    /// Returns the size in pixels of the framebuffer, which is what the viewport is
    /// measured in.
    #[inline]
    pub fn framebuffer_dimensions(&self) -> Vector2<u32> {
        self.visitor.framebuffer_dimensions()
    }

    /// Returns the ratio between the backing framebuffer resolution and the window size in
    /// screen pixels. This is typically one for a normal display and two for a retina display.
    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.visitor.device_pixel_ratio()
    }

    /// Resize the GL context, in pixels.
    #[inline]
    pub fn resize(&self, dimensions: Vector2<u32>) {
        self.visitor.resize(dimensions);
    }

    /// Returns the address of an OpenGL function, or null if it's unavailable.
    #[inline]
    pub fn get_proc_address(&self, symbol: &str) -> *const c_void {
        self.visitor.get_proc_address(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::InputEvent;
    use crate::input::keyboard::Key;
    use crate::window::backends::headless::HeadlessVisitor;
    use crate::window::events::WindowEvent;

    #[test]
    fn poll_in_batches() {
        let press = Event::InputDevice(InputEvent::KeyboardPressed { key: Key::Escape });
        let mut visitor = HeadlessVisitor::new(Vector2::new(800, 600));
        visitor.schedule(vec![press]);
        visitor.schedule(vec![Event::Window(WindowEvent::Resized(400, 300))]);

        let mut window = WindowSystem::from_visitor(Box::new(visitor));
        assert_eq!(window.poll_events(), &[press]);
        assert_eq!(window.framebuffer_dimensions(), Vector2::new(800, 600));

        assert_eq!(
            window.poll_events(),
            &[Event::Window(WindowEvent::Resized(400, 300))]
        );
        assert_eq!(window.framebuffer_dimensions(), Vector2::new(400, 300));
        assert!(window.poll_events().is_empty());
    }

    #[test]
    fn close_flag() {
        let mut window = WindowSystem::headless(WindowParams::default());
        assert!(!window.should_close());
        window.set_should_close(true);
        assert!(window.should_close());
    }
}
