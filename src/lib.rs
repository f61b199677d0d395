//! # Solar
//!
//! Two minimal OpenGL programs built on a tiny, testable core. `hello_window` opens a
//! window and clears it to a solid color every frame; `hello_triangle` additionally
//! uploads a static triangle, builds a shader program and draws it.
//!
//! The core is split the usual way:
//!
//! - `window` owns the OS window and its OpenGL context;
//! - `video` submits the handful of OpenGL calls the programs need;
//! - `input` keeps track of the keyboard;
//! - `application` sequences all of them in a single-threaded render loop.
//!
//! Both `window` and `video` talk to their platform through a `Visitor` trait, which
//! has a real backend (`glutin` and `gl`) and a headless one used by the tests.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

#[macro_use]
pub mod errors;
pub mod math;

pub mod input;
pub mod video;
pub mod window;

pub mod application;
pub mod tutorial;

pub mod prelude {
    pub use crate::application::prelude::*;
    pub use crate::errors::Result;
    pub use crate::input::prelude::*;
    pub use crate::math::prelude::*;
    pub use crate::video::prelude::*;
    pub use crate::window::prelude::*;
}
