//! Submits the handful of OpenGL commands the tutorials need.
//!
//! Everything goes through `VideoSystem`, which owns a backend `Visitor` and keeps
//! track of the objects it created. The `gl` backend talks to a real context, while
//! the headless one only records what would have happened.

pub mod backends;
pub mod types;

mod system;
pub use self::system::VideoSystem;

pub mod prelude {
    pub use super::types::{
        BufferHandle, BuildStatus, FrameInfo, Primitive, ProgramBuild, ProgramHandle,
        ShaderHandle, ShaderStage, VertexArrayHandle, VertexAttribute, Viewport,
    };
    pub use super::VideoSystem;
}
