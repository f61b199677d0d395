pub mod capabilities;
pub mod types;
pub mod visitor;

use std::os::raw::c_void;

use gl;

use crate::errors::*;

macro_rules! required_functions {
    ($($name:ident,)+) => {
        /// Loads the OpenGL function pointers with `loader`, and makes sure that every
        /// function we are going to call is available.
        pub fn load<F>(loader: F) -> Result<()>
        where
            F: FnMut(&'static str) -> *const c_void,
        {
            gl::load_with(loader);

            $(
                if !gl::$name::is_loaded() {
                    return Err(Error::Loader(concat!("gl", stringify!($name)).to_owned()).into());
                }
            )+

            Ok(())
        }
    };
}

required_functions! {
    GetString,
    GetIntegerv,
    GetError,
    Viewport,
    ClearColor,
    Clear,
    GenBuffers,
    BindBuffer,
    BufferData,
    GetBufferParameteriv,
    DeleteBuffers,
    GenVertexArrays,
    BindVertexArray,
    VertexAttribPointer,
    EnableVertexAttribArray,
    DeleteVertexArrays,
    CreateShader,
    ShaderSource,
    CompileShader,
    GetShaderiv,
    GetShaderInfoLog,
    DeleteShader,
    CreateProgram,
    AttachShader,
    DetachShader,
    LinkProgram,
    GetProgramiv,
    GetProgramInfoLog,
    DeleteProgram,
    UseProgram,
    DrawArrays,
}
