use std::ffi::CString;
use std::os::raw::c_void;

use gl;
use gl::types::*;

use crate::errors::*;
use crate::math::prelude::Color;

use super::super::super::types::*;
use super::super::Visitor;
use super::capabilities::{Capabilities, Version};

pub struct GLVisitor {
    viewport: Option<Viewport>,
}

impl GLVisitor {
    /// # Unsafe
    ///
    /// The function pointers must have been loaded from the context that is current in
    /// this thread.
    pub unsafe fn new() -> Result<Self> {
        let capabilities = Capabilities::parse()?;
        info!("GLVisitor {:#?}", capabilities);
        check_capabilities(&capabilities)?;

        Ok(GLVisitor { viewport: None })
    }
}

impl Visitor for GLVisitor {
    /// Set the viewport relative to the lower-left corner of th window, in pixels.
    unsafe fn update_viewport(&mut self, vp: Viewport) -> Result<()> {
        if self.viewport != Some(vp) {
            gl::Viewport(
                vp.position.x,
                vp.position.y,
                vp.size.x as GLsizei,
                vp.size.y as GLsizei,
            );

            self.viewport = Some(vp);
            check()?;
        }

        Ok(())
    }

    unsafe fn clear(&mut self, color: Color<f32>) -> Result<()> {
        gl::ClearColor(color.r, color.g, color.b, color.a);
        gl::Clear(gl::COLOR_BUFFER_BIT);
        check()
    }

    unsafe fn create_vertex_buffer(&mut self, bytes: &[u8]) -> Result<BufferHandle> {
        let mut id = 0;
        gl::GenBuffers(1, &mut id);
        if id == 0 {
            bail!("[GL] Failed to generate buffer object.");
        }

        let value = if bytes.is_empty() {
            ::std::ptr::null()
        } else {
            bytes.as_ptr() as *const c_void
        };

        gl::BindBuffer(gl::ARRAY_BUFFER, id);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            bytes.len() as GLsizeiptr,
            value,
            gl::STATIC_DRAW,
        );
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        check()?;

        Ok(BufferHandle(id))
    }

    unsafe fn vertex_buffer_len(&self, handle: BufferHandle) -> Result<usize> {
        let mut size: GLint = 0;
        gl::BindBuffer(gl::ARRAY_BUFFER, handle.0);
        gl::GetBufferParameteriv(gl::ARRAY_BUFFER, gl::BUFFER_SIZE, &mut size);
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        check()?;

        Ok(size as usize)
    }

    unsafe fn delete_vertex_buffer(&mut self, handle: BufferHandle) -> Result<()> {
        gl::DeleteBuffers(1, &handle.0);
        check()
    }

    unsafe fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        attributes: &[VertexAttribute],
    ) -> Result<VertexArrayHandle> {
        let mut id = 0;
        gl::GenVertexArrays(1, &mut id);
        if id == 0 {
            bail!("[GL] Failed to generate vertex array object.");
        }

        gl::BindVertexArray(id);
        gl::BindBuffer(gl::ARRAY_BUFFER, buffer.0);

        for v in attributes {
            gl::VertexAttribPointer(
                v.location,
                GLint::from(v.components),
                gl::FLOAT,
                gl::FALSE,
                v.stride as GLsizei,
                v.offset as *const c_void,
            );

            gl::EnableVertexAttribArray(v.location);
        }

        // The attribute pointers keep a reference to the buffer, so both can be unbound.
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        gl::BindVertexArray(0);
        check()?;

        Ok(VertexArrayHandle(id))
    }

    unsafe fn delete_vertex_array(&mut self, handle: VertexArrayHandle) -> Result<()> {
        gl::DeleteVertexArrays(1, &handle.0);
        check()
    }

    unsafe fn compile_shader(
        &mut self,
        stage: ShaderStage,
        src: &str,
    ) -> Result<(ShaderHandle, BuildStatus)> {
        let c_str = CString::new(src.as_bytes())?;

        let shader = gl::CreateShader(stage.into());
        gl::ShaderSource(shader, 1, &c_str.as_ptr(), ::std::ptr::null());
        gl::CompileShader(shader);

        // Get the compile status
        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        let status = BuildStatus::from_flag(status, || {
            info_log(|capacity, len, buf| gl::GetShaderInfoLog(shader, capacity, len, buf))
        });

        check()?;
        Ok((ShaderHandle(shader), status))
    }

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
        gl::DeleteShader(handle.0);
        check()
    }

    unsafe fn link_program(
        &mut self,
        shaders: &[ShaderHandle],
    ) -> Result<(ProgramHandle, BuildStatus)> {
        let program = gl::CreateProgram();
        for shader in shaders {
            gl::AttachShader(program, shader.0);
        }

        gl::LinkProgram(program);

        // Get the link status
        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        let status = BuildStatus::from_flag(status, || {
            info_log(|capacity, len, buf| gl::GetProgramInfoLog(program, capacity, len, buf))
        });

        for shader in shaders {
            gl::DetachShader(program, shader.0);
        }

        check()?;
        Ok((ProgramHandle(program), status))
    }

    unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()> {
        gl::DeleteProgram(handle.0);
        check()
    }

    unsafe fn draw(
        &mut self,
        program: ProgramHandle,
        vao: VertexArrayHandle,
        primitive: Primitive,
        first: u32,
        count: u32,
    ) -> Result<u32> {
        gl::UseProgram(program.0);
        gl::BindVertexArray(vao.0);
        gl::DrawArrays(primitive.into(), first as GLint, count as GLsizei);
        check()?;

        Ok(1)
    }
}

/// Reads at most `INFO_LOG_CAPACITY` bytes of an info log through `fetch`.
unsafe fn info_log<F>(fetch: F) -> String
where
    F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
{
    let mut buf = vec![0u8; INFO_LOG_CAPACITY];
    let mut len: GLsizei = 0;
    fetch(
        INFO_LOG_CAPACITY as GLsizei,
        &mut len,
        buf.as_mut_ptr() as *mut GLchar,
    );

    buf.truncate(len.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

fn check_capabilities(caps: &Capabilities) -> Result<()> {
    if !(caps.version >= Version::GL(3, 0) || caps.version >= Version::ES(3, 0)) {
        bail!("The OpenGL implementation does not supports vertex array objects.");
    }

    Ok(())
}

unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),

        gl::INVALID_ENUM => {
            bail!("[GL] An unacceptable value is specified for an enumerated argument.")
        }

        gl::INVALID_VALUE => bail!("[GL] A numeric argument is out of range."),

        gl::INVALID_OPERATION => {
            bail!("[GL] The specified operation is not allowed in the current state.")
        }

        gl::INVALID_FRAMEBUFFER_OPERATION => bail!(
            "[GL] The command is trying to render to or read from the framebuffer while the \
             currently bound framebuffer is not framebuffer complete."
        ),

        gl::OUT_OF_MEMORY => bail!("[GL] There is not enough memory left to execute the command."),
        _ => bail!("[GL] Oops, Unknown OpenGL error."),
    }
}
