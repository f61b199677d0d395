//! The backend of renderer, which should be responsible for only one thing:
//! submitting commands using low-level OpenGL video APIs.

pub mod gl;
pub mod headless;

use crate::errors::*;
use crate::math::prelude::Color;

use super::types::*;

/// # Safety
///
/// All the methods talk to the OpenGL context directly, which must be current on the
/// calling thread.
pub trait Visitor {
    unsafe fn update_viewport(&mut self, vp: Viewport) -> Result<()>;

    unsafe fn clear(&mut self, color: Color<f32>) -> Result<()>;

    unsafe fn create_vertex_buffer(&mut self, bytes: &[u8]) -> Result<BufferHandle>;

    /// Returns the size in bytes of the data store of a vertex buffer.
    unsafe fn vertex_buffer_len(&self, handle: BufferHandle) -> Result<usize>;

    unsafe fn delete_vertex_buffer(&mut self, handle: BufferHandle) -> Result<()>;

    unsafe fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        attributes: &[VertexAttribute],
    ) -> Result<VertexArrayHandle>;

    unsafe fn delete_vertex_array(&mut self, handle: VertexArrayHandle) -> Result<()>;

    unsafe fn compile_shader(
        &mut self,
        stage: ShaderStage,
        src: &str,
    ) -> Result<(ShaderHandle, BuildStatus)>;

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()>;

    unsafe fn link_program(
        &mut self,
        shaders: &[ShaderHandle],
    ) -> Result<(ProgramHandle, BuildStatus)>;

    unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()>;

    /// Draws `count` vertices starting from `first`, returns the number of draw calls
    /// submitted.
    unsafe fn draw(
        &mut self,
        program: ProgramHandle,
        vao: VertexArrayHandle,
        primitive: Primitive,
        first: u32,
        count: u32,
    ) -> Result<u32>;
}
