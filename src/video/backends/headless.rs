use std::collections::HashMap;

use crate::errors::*;
use crate::math::prelude::Color;

use super::super::types::*;
use super::Visitor;

/// A backend without any GPU behind it.
///
/// It hands out object names the way a driver would and validates their usage. A
/// shader "compiles" when its source has an entry point, and a program "links" when
/// it is made of one compiled vertex stage and one compiled fragment stage.
#[derive(Debug, Default)]
pub struct HeadlessVisitor {
    last_id: u32,
    buffers: HashMap<BufferHandle, usize>,
    vertex_arrays: HashMap<VertexArrayHandle, BufferHandle>,
    shaders: HashMap<ShaderHandle, (ShaderStage, bool)>,
    programs: HashMap<ProgramHandle, bool>,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor::default()
    }

    fn next_id(&mut self) -> u32 {
        self.last_id += 1;
        self.last_id
    }
}

impl Visitor for HeadlessVisitor {
    unsafe fn update_viewport(&mut self, _: Viewport) -> Result<()> {
        Ok(())
    }

    unsafe fn clear(&mut self, _: Color<f32>) -> Result<()> {
        Ok(())
    }

    unsafe fn create_vertex_buffer(&mut self, bytes: &[u8]) -> Result<BufferHandle> {
        let handle = BufferHandle(self.next_id());
        self.buffers.insert(handle, bytes.len());
        Ok(handle)
    }

    unsafe fn vertex_buffer_len(&self, handle: BufferHandle) -> Result<usize> {
        match self.buffers.get(&handle) {
            Some(&len) => Ok(len),
            None => bail!("{} is invalid.", handle),
        }
    }

    unsafe fn delete_vertex_buffer(&mut self, handle: BufferHandle) -> Result<()> {
        if self.buffers.remove(&handle).is_none() {
            bail!("{} is invalid.", handle);
        }

        Ok(())
    }

    unsafe fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        attributes: &[VertexAttribute],
    ) -> Result<VertexArrayHandle> {
        if !self.buffers.contains_key(&buffer) {
            bail!("{} is invalid.", buffer);
        }

        for v in attributes {
            if v.components == 0 || v.components > 4 {
                bail!("Attribute at location {} has {} components.", v.location, v.components);
            }
        }

        let handle = VertexArrayHandle(self.next_id());
        self.vertex_arrays.insert(handle, buffer);
        Ok(handle)
    }

    unsafe fn delete_vertex_array(&mut self, handle: VertexArrayHandle) -> Result<()> {
        if self.vertex_arrays.remove(&handle).is_none() {
            bail!("{} is invalid.", handle);
        }

        Ok(())
    }

    unsafe fn compile_shader(
        &mut self,
        stage: ShaderStage,
        src: &str,
    ) -> Result<(ShaderHandle, BuildStatus)> {
        let handle = ShaderHandle(self.next_id());
        let flag = src.contains("void main") as i32;
        let status = BuildStatus::from_flag(flag, || {
            "0:1(1): error: entry point `void main()` is not defined.".to_owned()
        });

        self.shaders.insert(handle, (stage, status.is_ok()));
        Ok((handle, status))
    }

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
        if self.shaders.remove(&handle).is_none() {
            bail!("{} is invalid.", handle);
        }

        Ok(())
    }

    unsafe fn link_program(
        &mut self,
        shaders: &[ShaderHandle],
    ) -> Result<(ProgramHandle, BuildStatus)> {
        let mut vertex = 0;
        let mut fragment = 0;
        let mut compiled = true;

        for handle in shaders {
            let (stage, ok) = match self.shaders.get(handle) {
                Some(&v) => v,
                None => bail!("{} is invalid.", handle),
            };

            compiled &= ok;
            match stage {
                ShaderStage::Vertex => vertex += 1,
                ShaderStage::Fragment => fragment += 1,
            }
        }

        let handle = ProgramHandle(self.next_id());
        let flag = (compiled && vertex == 1 && fragment == 1) as i32;
        let status = BuildStatus::from_flag(flag, || {
            if compiled {
                "error: a program needs exactly one vertex and one fragment shader.".to_owned()
            } else {
                "error: linking with uncompiled/unsuccessfully compiled shader.".to_owned()
            }
        });

        self.programs.insert(handle, status.is_ok());
        Ok((handle, status))
    }

    unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()> {
        if self.programs.remove(&handle).is_none() {
            bail!("{} is invalid.", handle);
        }

        Ok(())
    }

    unsafe fn draw(
        &mut self,
        program: ProgramHandle,
        vao: VertexArrayHandle,
        _: Primitive,
        _: u32,
        _: u32,
    ) -> Result<u32> {
        match self.programs.get(&program) {
            Some(true) => {}
            Some(false) => bail!("{} has not been linked successfully.", program),
            None => bail!("{} is invalid.", program),
        }

        if !self.vertex_arrays.contains_key(&vao) {
            bail!("{} is invalid.", vao);
        }

        Ok(1)
    }
}
