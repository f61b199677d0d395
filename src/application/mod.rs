//! A single-threaded application model.
//!
//! ## Application
//!
//! `Application` defines a simple application-state-model. While the application is
//! alive, the associated per-frame methods are called in a pre-determined order.
//!
//! # Engine
//!
//! `Engine` is where we actully running the main loop and fire `Application` instance. It
//! binds the window, input and video systems in a central place.

pub mod settings;

mod engine;
pub use self::engine::Engine;

pub mod prelude {
    pub use super::settings::Settings;
    pub use super::{Application, Engine};
}

use crate::errors::*;
use crate::video::VideoSystem;

/// `Application` is a user-friendly facade to building application, which defines a number
/// of event functions that get executed in a pre-determined order.
pub trait Application {
    /// `Application::on_setup` is called once, before the first frame.
    fn on_setup(&mut self, _: &mut VideoSystem) -> Result<()> {
        Ok(())
    }

    /// `Application::on_render` is called every frame, right after the color buffer
    /// has been cleared.
    fn on_render(&mut self, _: &mut VideoSystem) -> Result<()> {
        Ok(())
    }

    /// `Application::on_exit` is called once the main loop has finished. Everything
    /// created on the GPU should be released here.
    fn on_exit(&mut self, _: &mut VideoSystem) -> Result<()> {
        Ok(())
    }
}
