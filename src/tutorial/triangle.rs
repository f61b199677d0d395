use std::mem;

use crate::application::Application;
use crate::errors::*;
use crate::video::types::*;
use crate::video::VideoSystem;

/// The positions of the three corners, in normalized device coordinates.
#[rustfmt::skip]
pub const VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

pub const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

#[derive(Debug, Clone, Copy)]
struct Resources {
    vbo: BufferHandle,
    vao: VertexArrayHandle,
    program: ProgramHandle,
}

/// Uploads a static triangle and draws it every frame with a fixed shader program.
#[derive(Debug, Default)]
pub struct HelloTriangle {
    resources: Option<Resources>,
    build: Option<ProgramBuild>,
}

impl HelloTriangle {
    pub fn new() -> Self {
        HelloTriangle::default()
    }

    /// Returns the outcome of building the shader program, once set up.
    pub fn program_build(&self) -> Option<&ProgramBuild> {
        self.build.as_ref()
    }

    /// Returns the vertex buffer holding `VERTICES`, once set up.
    pub fn vertex_buffer(&self) -> Option<BufferHandle> {
        self.resources.map(|v| v.vbo)
    }
}

impl Application for HelloTriangle {
    fn on_setup(&mut self, video: &mut VideoSystem) -> Result<()> {
        let vbo = video.create_vertex_buffer(bytemuck::cast_slice(&VERTICES))?;

        let position = VertexAttribute {
            location: 0,
            components: 3,
            stride: 3 * mem::size_of::<f32>(),
            offset: 0,
        };

        let vao = video.create_vertex_array(vbo, &[position])?;
        let build = video.build_program(VERTEX_SHADER, FRAGMENT_SHADER)?;

        self.resources = Some(Resources {
            vbo,
            vao,
            program: build.program,
        });

        self.build = Some(build);
        Ok(())
    }

    fn on_render(&mut self, video: &mut VideoSystem) -> Result<()> {
        if let Some(v) = self.resources {
            video.draw(v.program, v.vao, Primitive::Triangles, 0, 3)?;
        }

        Ok(())
    }

    fn on_exit(&mut self, video: &mut VideoSystem) -> Result<()> {
        if let Some(v) = self.resources.take() {
            video.delete_vertex_array(v.vao)?;
            video.delete_vertex_buffer(v.vbo)?;
            video.delete_program(v.program)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_fill_36_bytes() {
        assert_eq!(mem::size_of_val(&VERTICES), 36);
        assert_eq!(bytemuck::cast_slice::<f32, u8>(&VERTICES).len(), 36);
    }

    #[test]
    fn setup_and_exit() {
        let mut video = VideoSystem::headless();
        let mut app = HelloTriangle::new();

        app.on_setup(&mut video).unwrap();
        assert!(app.program_build().map(|v| v.is_linked()).unwrap_or(false));
        assert_eq!(video.alive_objects(), 3);

        app.on_exit(&mut video).unwrap();
        assert_eq!(video.alive_objects(), 0);
        assert_eq!(app.vertex_buffer(), None);
    }
}
