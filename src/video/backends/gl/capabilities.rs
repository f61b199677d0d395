use std::cmp;
use std::ffi;

use gl;
use gl::types::*;

use crate::errors::*;

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Obtains the OpenGL version of the current context using the loaded functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn query() -> Result<Version> {
        Version::parse(&get_string(gl::VERSION)?)
    }

    /// Parses a `GL_VERSION` string, e.g. "4.6.0 NVIDIA 390.77" or "OpenGL ES 3.2 Mesa 18.1.3".
    pub fn parse(desc: &str) -> Result<Version> {
        let (es, desc) = if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else if desc.starts_with("OpenGL ES-") {
            // "OpenGL ES-CM 1.1", the profile takes two more characters and a space.
            let tail = desc
                .get(13..)
                .ok_or_else(|| err_format!("[GL] Version string {:?} is malformed.", desc))?;
            (true, tail)
        } else {
            (false, desc)
        };

        let desc = desc
            .split(' ')
            .next()
            .ok_or_else(|| err_format!("[GL] Version string {:?} is malformed.", desc))?;

        let mut iter = desc.split('.');
        let mut next = || -> Result<u8> {
            iter.next()
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| err_format!("[GL] Version string {:?} is malformed.", desc))
        };

        let major = next()?;
        let minor = next()?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

/// Informations about the OpenGL implementation behind the current context.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub version: Version,
    pub vendor: String,
    pub renderer: String,
    pub shading_language: String,
}

impl Capabilities {
    /// # Unsafe
    ///
    /// The OpenGL context must be current in the thread.
    pub unsafe fn parse() -> Result<Capabilities> {
        Ok(Capabilities {
            version: Version::query()?,
            vendor: get_string(gl::VENDOR)?,
            renderer: get_string(gl::RENDERER)?,
            shading_language: get_string(gl::SHADING_LANGUAGE_VERSION)?,
        })
    }
}

unsafe fn get_string(name: GLenum) -> Result<String> {
    let desc = gl::GetString(name);
    if desc.is_null() {
        bail!("[GL] Failed to query string {:#x}.", name);
    }

    let desc = ffi::CStr::from_ptr(desc as *const _);
    Ok(desc.to_string_lossy().into_owned())
}
