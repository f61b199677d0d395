use std::fmt;

use crate::math::prelude::Vector2;

/// The maximum number of characters kept from a shader or program info log.
pub const INFO_LOG_CAPACITY: usize = 512;

macro_rules! impl_gl_handle {
    ($name: ident) => {
        /// The name of an OpenGL object.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) u32);

        impl $name {
            #[inline]
            pub fn id(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

impl_gl_handle!(BufferHandle);
impl_gl_handle!(VertexArrayHandle);
impl_gl_handle!(ShaderHandle);
impl_gl_handle!(ProgramHandle);

/// A rectangle of the framebuffer, in pixels, relative to its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub position: Vector2<i32>,
    pub size: Vector2<u32>,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::fullscreen(Vector2::new(0, 0))
    }
}

impl Viewport {
    /// A viewport covering a whole framebuffer of `dimensions`.
    pub fn fullscreen(dimensions: Vector2<u32>) -> Self {
        Viewport {
            position: Vector2::new(0, 0),
            size: dimensions,
        }
    }
}

/// Specifies what kind of primitives to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Describes how one shader input reads `f32` components out of a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// The `layout (location = ..)` of the input.
    pub location: u32,
    /// Number of `f32` components, 1 to 4.
    pub components: u8,
    /// Distance in bytes between two consecutive vertices.
    pub stride: usize,
    /// Offset in bytes of the first component.
    pub offset: usize,
}

impl VertexAttribute {
    /// An attribute reading tightly packed `f32` vectors.
    pub fn packed(location: u32, components: u8) -> Self {
        VertexAttribute {
            location,
            components,
            stride: components as usize * ::std::mem::size_of::<f32>(),
            offset: 0,
        }
    }
}

/// The outcome of compiling a shader or linking a program.
///
/// A failed build is not an error: the diagnostic is reported and the (unusable)
/// object is kept around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    Ok,
    Failed(String),
}

impl BuildStatus {
    /// Interprets a `GL_COMPILE_STATUS` or `GL_LINK_STATUS` flag. The info log is only
    /// fetched when the flag is false, and truncated to `INFO_LOG_CAPACITY` characters.
    pub fn from_flag<F>(flag: i32, log: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if flag != 0 {
            BuildStatus::Ok
        } else {
            BuildStatus::Failed(log().chars().take(INFO_LOG_CAPACITY).collect())
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        *self == BuildStatus::Ok
    }

    pub fn log(&self) -> Option<&str> {
        match *self {
            BuildStatus::Ok => None,
            BuildStatus::Failed(ref log) => Some(log),
        }
    }
}

/// Everything that happened while building a shader program from its two stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramBuild {
    pub program: ProgramHandle,
    pub vertex: BuildStatus,
    pub fragment: BuildStatus,
    pub link: BuildStatus,
}

impl ProgramBuild {
    /// Returns true if the program could be used for drawing.
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.link.is_ok()
    }
}

/// Statistics of the commands submitted during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub drawcalls: u32,
    pub vertices: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_flag() {
        assert_eq!(BuildStatus::from_flag(1, || unreachable!()), BuildStatus::Ok);
        assert_eq!(
            BuildStatus::from_flag(0, || "ERROR: 0:1: syntax error".to_owned()),
            BuildStatus::Failed("ERROR: 0:1: syntax error".to_owned())
        );
    }

    #[test]
    fn log_is_truncated() {
        let status = BuildStatus::from_flag(0, || "x".repeat(INFO_LOG_CAPACITY * 2));
        assert_eq!(status.log().map(|v| v.len()), Some(INFO_LOG_CAPACITY));
    }

    #[test]
    fn packed_attribute() {
        let attr = VertexAttribute::packed(0, 3);
        assert_eq!(attr.stride, 12);
        assert_eq!(attr.offset, 0);
    }
}
