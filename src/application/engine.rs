use crate::errors::*;
use crate::input::keyboard::Key;
use crate::input::InputSystem;
use crate::math::prelude::Vector2;
use crate::video::types::Viewport;
use crate::video::VideoSystem;
use crate::window::events::{Event, WindowEvent};
use crate::window::WindowSystem;

use super::settings::Settings;
use super::Application;

/// `Engine` is the root object of the application. It binds various sub-systems in
/// a central place and takes take of trivial tasks like the execution order.
pub struct Engine {
    pub window: WindowSystem,
    pub input: InputSystem,
    pub video: VideoSystem,
    settings: Settings,
    frames: u64,
}

impl Engine {
    /// Creates the window and its OpenGL context, and loads the OpenGL function pointers.
    ///
    /// Fails with `Error::WindowCreation` or `Error::Loader` if either step fails.
    pub fn new(settings: Settings) -> Result<Self> {
        if settings.headless {
            return Engine::headless(settings);
        }

        let window = WindowSystem::new(settings.window.clone())?;
        let video = VideoSystem::new(&window)?;
        Engine::from_systems(settings, window, video)
    }

    /// Setup engine with headless window and video systems.
    pub fn headless(settings: Settings) -> Result<Self> {
        let window = WindowSystem::headless(settings.window.clone());
        let video = VideoSystem::headless();
        Engine::from_systems(settings, window, video)
    }

    pub fn from_systems(
        settings: Settings,
        window: WindowSystem,
        video: VideoSystem,
    ) -> Result<Self> {
        let mut engine = Engine {
            window,
            input: InputSystem::new(),
            video,
            settings,
            frames: 0,
        };

        let dimensions = engine.window.framebuffer_dimensions();
        engine.on_framebuffer_resized(dimensions)?;
        Ok(engine)
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the number of frames that have been completed.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run the main loop of `Engine`, this will block the working thread until the
    /// window has been asked to close.
    pub fn run<T: Application>(&mut self, application: &mut T) -> Result<()> {
        application.on_setup(&mut self.video)?;

        while !self.window.should_close() {
            self.advance(application)?;
        }

        info!("Exiting after {} frames.", self.frames);
        application.on_exit(&mut self.video)
    }

    /// Runs one iteration of the main loop.
    pub fn advance<T: Application>(&mut self, application: &mut T) -> Result<()> {
        self.process_input();

        self.video.clear(self.settings.clear_color)?;
        application.on_render(&mut self.video)?;
        self.video.advance();

        self.window.swap_buffers()?;
        self.poll_events()?;

        self.frames += 1;
        Ok(())
    }

    /// Keeps the viewport covering the whole framebuffer.
    pub fn on_framebuffer_resized(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        debug!("Framebuffer resized to {}x{}.", dimensions.x, dimensions.y);
        self.video.update_viewport(Viewport::fullscreen(dimensions))
    }

    fn process_input(&mut self) {
        if self.input.is_key_down(Key::Escape) {
            self.window.set_should_close(true);
        }
    }

    fn poll_events(&mut self) -> Result<()> {
        self.input.advance();

        let events = self.window.poll_events().to_vec();
        for v in events {
            match v {
                Event::Window(WindowEvent::Closed) => self.window.set_should_close(true),
                Event::Window(WindowEvent::Resized(width, height)) => {
                    let dimensions = Vector2::new(width, height);
                    self.window.resize(dimensions);
                    self.on_framebuffer_resized(dimensions)?;
                }
                Event::Window(WindowEvent::LostFocus) => self.input.reset(),
                Event::Window(WindowEvent::GainFocus) => {}
                Event::InputDevice(e) => self.input.on_event(e),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::InputEvent;
    use crate::window::backends::headless::HeadlessVisitor;

    struct Noop;
    impl Application for Noop {}

    fn engine(batches: Vec<Vec<Event>>) -> Engine {
        let settings = Settings::default();
        let mut visitor = HeadlessVisitor::new(settings.window.size);
        for v in batches {
            visitor.schedule(v);
        }

        let window = WindowSystem::from_visitor(Box::new(visitor));
        Engine::from_systems(settings, window, VideoSystem::headless()).unwrap()
    }

    #[test]
    fn initial_viewport() {
        let engine = engine(vec![]);
        assert_eq!(engine.video.viewport().size, Vector2::new(800, 600));
    }

    #[test]
    fn lost_focus_forgets_keys() {
        let press = Event::InputDevice(InputEvent::KeyboardPressed { key: Key::Escape });
        let lost = Event::Window(WindowEvent::LostFocus);
        let mut engine = engine(vec![vec![press, lost]]);

        engine.advance(&mut Noop).unwrap();
        engine.advance(&mut Noop).unwrap();
        assert!(!engine.window.should_close());
    }

    #[test]
    fn close_requested() {
        let mut engine = engine(vec![vec![], vec![Event::Window(WindowEvent::Closed)]]);
        engine.run(&mut Noop).unwrap();
        assert_eq!(engine.frames(), 2);
    }
}
