//! Represents an OpenGL context and the window or environment around it.

pub mod backends;
pub mod events;

mod system;
pub use self::system::WindowSystem;

pub mod prelude {
    pub use super::events::{Event, WindowEvent};
    pub use super::{WindowParams, WindowSystem};
}

use serde::{Deserialize, Serialize};

use crate::math::prelude::Vector2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// The (major, minor) version of the core profile OpenGL context to request.
    pub gl_version: (u8, u8),
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "Solar".to_owned(),
            size: Vector2::new(800, 600),
            gl_version: (3, 3),
            vsync: true,
        }
    }
}
