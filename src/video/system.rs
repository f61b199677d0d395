use std::collections::{HashMap, HashSet};

use crate::errors::*;
use crate::math::prelude::Color;
use crate::window::WindowSystem;

use super::backends::{self, Visitor};
use super::types::*;

/// The centralized management of video sub-system.
///
/// Keeps track of every object created through it, so that misuse of a stale handle
/// is reported instead of being forwarded to the driver.
pub struct VideoSystem {
    visitor: Box<dyn Visitor>,
    viewport: Viewport,
    clear_color: Option<Color<f32>>,
    buffers: HashSet<BufferHandle>,
    vertex_arrays: HashSet<VertexArrayHandle>,
    programs: HashMap<ProgramHandle, bool>,
    frame: FrameInfo,
    last_frame: FrameInfo,
}

impl VideoSystem {
    /// Loads the OpenGL function pointers of the context owned by `window`, which must
    /// be current in this thread.
    pub fn new(window: &WindowSystem) -> Result<Self> {
        backends::gl::load(|symbol| window.get_proc_address(symbol))?;

        let visitor = unsafe { backends::gl::visitor::GLVisitor::new()? };
        Ok(Self::from_visitor(Box::new(visitor)))
    }

    /// Creates a new `VideoSystem` without any GPU behind it.
    pub fn headless() -> Self {
        Self::from_visitor(Box::new(backends::headless::HeadlessVisitor::new()))
    }

    pub fn from_visitor(visitor: Box<dyn Visitor>) -> Self {
        VideoSystem {
            visitor,
            viewport: Viewport::default(),
            clear_color: None,
            buffers: HashSet::new(),
            vertex_arrays: HashSet::new(),
            programs: HashMap::new(),
            frame: FrameInfo::default(),
            last_frame: FrameInfo::default(),
        }
    }

    /// Marks the end of a frame.
    pub fn advance(&mut self) {
        self.last_frame = self.frame;
        self.frame = FrameInfo::default();
    }

    /// Returns the statistics of the last completed frame.
    #[inline]
    pub fn frame_info(&self) -> FrameInfo {
        self.last_frame
    }

    /// Returns the number of buffers, vertex arrays and programs that are still alive.
    #[inline]
    pub fn alive_objects(&self) -> usize {
        self.buffers.len() + self.vertex_arrays.len() + self.programs.len()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn update_viewport(&mut self, vp: Viewport) -> Result<()> {
        unsafe { self.visitor.update_viewport(vp)? };
        self.viewport = vp;
        Ok(())
    }

    /// Clears the color buffer of the default framebuffer.
    pub fn clear(&mut self, color: Color<f32>) -> Result<()> {
        unsafe { self.visitor.clear(color)? };
        self.clear_color = Some(color);
        Ok(())
    }

    /// Returns the color of the last successful clear, if any.
    #[inline]
    pub fn clear_color(&self) -> Option<Color<f32>> {
        self.clear_color
    }

    /// Creates a vertex buffer initialized with `bytes`.
    pub fn create_vertex_buffer(&mut self, bytes: &[u8]) -> Result<BufferHandle> {
        let handle = unsafe { self.visitor.create_vertex_buffer(bytes)? };
        debug!("Created {} of {} bytes.", handle, bytes.len());

        self.buffers.insert(handle);
        Ok(handle)
    }

    /// Returns the size in bytes of the data store of a vertex buffer.
    pub fn vertex_buffer_len(&self, handle: BufferHandle) -> Result<usize> {
        if !self.buffers.contains(&handle) {
            bail!("{} is invalid.", handle);
        }

        unsafe { self.visitor.vertex_buffer_len(handle) }
    }

    pub fn delete_vertex_buffer(&mut self, handle: BufferHandle) -> Result<()> {
        if !self.buffers.remove(&handle) {
            bail!("{} is invalid.", handle);
        }

        unsafe { self.visitor.delete_vertex_buffer(handle) }
    }

    /// Creates a vertex array which feeds `attributes` from `buffer`.
    pub fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        attributes: &[VertexAttribute],
    ) -> Result<VertexArrayHandle> {
        if !self.buffers.contains(&buffer) {
            bail!("{} is invalid.", buffer);
        }

        let handle = unsafe { self.visitor.create_vertex_array(buffer, attributes)? };
        self.vertex_arrays.insert(handle);
        Ok(handle)
    }

    pub fn delete_vertex_array(&mut self, handle: VertexArrayHandle) -> Result<()> {
        if !self.vertex_arrays.remove(&handle) {
            bail!("{} is invalid.", handle);
        }

        unsafe { self.visitor.delete_vertex_array(handle) }
    }

    /// Compiles a vertex and a fragment shader and links them into a program. The shader
    /// objects are deleted right after linking.
    ///
    /// Compile and link failures are logged but never returned as errors, the program is
    /// created anyway and just refuses to draw.
    pub fn build_program(&mut self, vs: &str, fs: &str) -> Result<ProgramBuild> {
        unsafe {
            let (vs, vertex) = self.visitor.compile_shader(ShaderStage::Vertex, vs)?;
            report("compile vertex shader", &vertex);

            let (fs, fragment) = match self.visitor.compile_shader(ShaderStage::Fragment, fs) {
                Ok(v) => v,
                Err(err) => {
                    self.visitor.delete_shader(vs)?;
                    return Err(err);
                }
            };
            report("compile fragment shader", &fragment);

            // The shader objects are released whatever the outcome of linking is.
            let linked = self.visitor.link_program(&[vs, fs]);
            self.visitor.delete_shader(vs)?;
            self.visitor.delete_shader(fs)?;

            let (program, link) = linked?;
            report("link shader program", &link);

            self.programs.insert(program, link.is_ok());
            Ok(ProgramBuild {
                program,
                vertex,
                fragment,
                link,
            })
        }
    }

    pub fn delete_program(&mut self, handle: ProgramHandle) -> Result<()> {
        if self.programs.remove(&handle).is_none() {
            bail!("{} is invalid.", handle);
        }

        unsafe { self.visitor.delete_program(handle) }
    }

    /// Draws `count` vertices of `vao` with `program`. Drawing with a program that failed
    /// to link is silently skipped.
    pub fn draw(
        &mut self,
        program: ProgramHandle,
        vao: VertexArrayHandle,
        primitive: Primitive,
        first: u32,
        count: u32,
    ) -> Result<()> {
        match self.programs.get(&program) {
            Some(true) => {}
            Some(false) => return Ok(()),
            None => bail!("{} is invalid.", program),
        }

        if !self.vertex_arrays.contains(&vao) {
            bail!("{} is invalid.", vao);
        }

        let drawcalls = unsafe { self.visitor.draw(program, vao, primitive, first, count)? };
        self.frame.drawcalls += drawcalls;
        self.frame.vertices += count;
        Ok(())
    }
}

fn report(action: &str, status: &BuildStatus) {
    if let Some(log) = status.log() {
        error!("Failed to {}.\n{}", action, log);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    const VS: &str = "#version 330 core\nvoid main() { gl_Position = vec4(0.0); }";
    const FS: &str = "#version 330 core\nout vec4 c;\nvoid main() { c = vec4(1.0); }";

    #[test]
    fn build_and_draw() {
        let mut video = VideoSystem::headless();
        let vbo = video.create_vertex_buffer(&[0; 36]).unwrap();
        let vao = video
            .create_vertex_array(vbo, &[VertexAttribute::packed(0, 3)])
            .unwrap();

        let build = video.build_program(VS, FS).unwrap();
        assert!(build.is_linked());

        video.draw(build.program, vao, Primitive::Triangles, 0, 3).unwrap();
        video.draw(build.program, vao, Primitive::Triangles, 0, 3).unwrap();
        video.advance();

        let info = video.frame_info();
        assert_eq!(info.drawcalls, 2);
        assert_eq!(info.vertices, 6);

        video.advance();
        assert_eq!(video.frame_info(), FrameInfo::default());
    }

    #[test]
    fn failed_build_is_not_an_error() {
        let mut video = VideoSystem::headless();
        let build = video.build_program("garbage", FS).unwrap();

        assert!(!build.vertex.is_ok());
        assert!(build.fragment.is_ok());
        assert!(!build.is_linked());
        assert!(build.link.log().is_some());

        let vbo = video.create_vertex_buffer(&[0; 12]).unwrap();
        let vao = video
            .create_vertex_array(vbo, &[VertexAttribute::packed(0, 3)])
            .unwrap();

        video.draw(build.program, vao, Primitive::Triangles, 0, 3).unwrap();
        video.advance();
        assert_eq!(video.frame_info().drawcalls, 0);
    }

    /// Counts the shader objects alive in a headless backend, and turns the chosen
    /// operation into a driver error.
    struct Faulty {
        inner: backends::headless::HeadlessVisitor,
        shaders: Rc<Cell<usize>>,
        fail_fragment: bool,
        fail_link: bool,
    }

    impl Faulty {
        fn new(fail_fragment: bool, fail_link: bool) -> (Self, Rc<Cell<usize>>) {
            let shaders = Rc::new(Cell::new(0));
            let visitor = Faulty {
                inner: backends::headless::HeadlessVisitor::new(),
                shaders: shaders.clone(),
                fail_fragment,
                fail_link,
            };

            (visitor, shaders)
        }
    }

    impl Visitor for Faulty {
        unsafe fn update_viewport(&mut self, vp: Viewport) -> Result<()> {
            self.inner.update_viewport(vp)
        }

        unsafe fn clear(&mut self, color: Color<f32>) -> Result<()> {
            self.inner.clear(color)
        }

        unsafe fn create_vertex_buffer(&mut self, bytes: &[u8]) -> Result<BufferHandle> {
            self.inner.create_vertex_buffer(bytes)
        }

        unsafe fn vertex_buffer_len(&self, handle: BufferHandle) -> Result<usize> {
            self.inner.vertex_buffer_len(handle)
        }

        unsafe fn delete_vertex_buffer(&mut self, handle: BufferHandle) -> Result<()> {
            self.inner.delete_vertex_buffer(handle)
        }

        unsafe fn create_vertex_array(
            &mut self,
            buffer: BufferHandle,
            attributes: &[VertexAttribute],
        ) -> Result<VertexArrayHandle> {
            self.inner.create_vertex_array(buffer, attributes)
        }

        unsafe fn delete_vertex_array(&mut self, handle: VertexArrayHandle) -> Result<()> {
            self.inner.delete_vertex_array(handle)
        }

        unsafe fn compile_shader(
            &mut self,
            stage: ShaderStage,
            src: &str,
        ) -> Result<(ShaderHandle, BuildStatus)> {
            if self.fail_fragment && stage == ShaderStage::Fragment {
                bail!("[GL] Failed to create shader object.");
            }

            let v = self.inner.compile_shader(stage, src)?;
            self.shaders.set(self.shaders.get() + 1);
            Ok(v)
        }

        unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
            self.inner.delete_shader(handle)?;
            self.shaders.set(self.shaders.get() - 1);
            Ok(())
        }

        unsafe fn link_program(
            &mut self,
            shaders: &[ShaderHandle],
        ) -> Result<(ProgramHandle, BuildStatus)> {
            if self.fail_link {
                bail!("[GL] Failed to create program object.");
            }

            self.inner.link_program(shaders)
        }

        unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()> {
            self.inner.delete_program(handle)
        }

        unsafe fn draw(
            &mut self,
            program: ProgramHandle,
            vao: VertexArrayHandle,
            primitive: Primitive,
            first: u32,
            count: u32,
        ) -> Result<u32> {
            self.inner.draw(program, vao, primitive, first, count)
        }
    }

    #[test]
    fn shaders_released_when_build_errors() {
        let (visitor, shaders) = Faulty::new(true, false);
        let mut video = VideoSystem::from_visitor(Box::new(visitor));
        assert!(video.build_program(VS, FS).is_err());
        assert_eq!(shaders.get(), 0);
        assert_eq!(video.alive_objects(), 0);

        let (visitor, shaders) = Faulty::new(false, true);
        let mut video = VideoSystem::from_visitor(Box::new(visitor));
        assert!(video.build_program(VS, FS).is_err());
        assert_eq!(shaders.get(), 0);
        assert_eq!(video.alive_objects(), 0);

        let (visitor, shaders) = Faulty::new(false, false);
        let mut video = VideoSystem::from_visitor(Box::new(visitor));
        assert!(video.build_program(VS, FS).unwrap().is_linked());
        assert_eq!(shaders.get(), 0);
        assert_eq!(video.alive_objects(), 1);
    }

    #[test]
    fn stale_handles() {
        let mut video = VideoSystem::headless();
        let vbo = video.create_vertex_buffer(&[0; 4]).unwrap();
        assert_eq!(video.alive_objects(), 1);

        video.delete_vertex_buffer(vbo).unwrap();
        assert_eq!(video.alive_objects(), 0);
        assert!(video.delete_vertex_buffer(vbo).is_err());
        assert!(video.vertex_buffer_len(vbo).is_err());
        assert!(video.create_vertex_array(vbo, &[]).is_err());
    }

    #[test]
    fn clear() {
        let mut video = VideoSystem::headless();
        assert_eq!(video.clear_color(), None);

        let color = Color::new(0.1, 0.2, 0.3, 1.0);
        video.clear(color).unwrap();
        assert_eq!(video.clear_color(), Some(color));
    }

    #[test]
    fn viewport() {
        let mut video = VideoSystem::headless();
        let vp = Viewport::fullscreen((320, 240).into());
        video.update_viewport(vp).unwrap();
        assert_eq!(video.viewport(), vp);
    }
}
