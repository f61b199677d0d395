//! Error types shared by every subsystem.
//!
//! Most functions return the catch-all `failure::Error`. The initialization failures
//! have their own variants so that callers can tell them apart with `downcast_ref`.

use failure::Fail;

pub type Result<T> = ::std::result::Result<T, failure::Error>;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to create window: {}", _0)]
    WindowCreation(String),
    #[fail(display = "Failed to initialize OpenGL loader, {} is unavailable.", _0)]
    Loader(String),
    #[fail(display = "Context: {}", _0)]
    Context(String),
}

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        Error::WindowCreation(format!("{}", err))
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::Context(format!("{}", err))
    }
}

macro_rules! err_format {
    ($e:expr) => {
        failure::err_msg($e)
    };
    ($fmt:expr, $($arg:tt)+) => {
        failure::err_msg(format!($fmt, $($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err: failure::Error = Error::Loader("glViewport".into()).into();
        assert!(err.downcast_ref::<Error>().is_some());
        assert_eq!(format!("{}", err_format!("[GL] {}", 1)), "[GL] 1");

        assert_eq!(
            format!("{}", err),
            "Failed to initialize OpenGL loader, glViewport is unavailable."
        );
    }
}
