//! The two tutorial programs, as `Application`s.

mod triangle;
mod window;

pub use self::triangle::{HelloTriangle, FRAGMENT_SHADER, VERTEX_SHADER, VERTICES};
pub use self::window::HelloWindow;
