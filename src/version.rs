// glbinder/src/version.rs
//
//! Detection of the OpenGL version and profile of the current context.

use crate::bindings::Gl;
use crate::info::{GLApi, GLVersion, GLES_VERSION_MARKER};
use crate::loader::{LoaderAttributes, LoaderFlags};
use crate::types::{GLenum, GLint};

use log::warn;
use std::ffi::CStr;
use std::os::raw::c_char;

/// Upper bound on the number of stale errors drained before a query.
const MAX_PENDING_ERRORS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DetectedVersion {
    pub(crate) api: GLApi,
    pub(crate) version: GLVersion,
    pub(crate) emulated: bool,
}

pub(crate) fn detect(gl: &Gl, attributes: &LoaderAttributes) -> DetectedVersion {
    let version_string = get_string(gl, glow::VERSION).unwrap_or_default();
    let api = if version_string.starts_with(GLES_VERSION_MARKER) {
        GLApi::GLES
    } else {
        GLApi::GL
    };

    let version = match get_integer(gl, glow::MAJOR_VERSION) {
        Ok(major) => {
            let minor = get_integer(gl, glow::MINOR_VERSION).unwrap_or(0);
            GLVersion::new(clamp_version_number(major), clamp_version_number(minor))
        }
        Err(()) => match GLVersion::parse(&version_string, api) {
            Some(version) => version,
            None => {
                let fallback = attributes.fallback_version(api);
                warn!(
                    "Couldn't parse GL_VERSION {:?}; assuming {:?} {}.{}",
                    version_string, api, fallback.major, fallback.minor
                );
                return DetectedVersion { api, version: fallback, emulated: false };
            }
        },
    };

    // Emulators may report the host GPU's version through `glGetIntegerv` while the version
    // string reflects the API level actually emulated.
    if api == GLApi::GLES && attributes.flags.contains(LoaderFlags::DETECT_EMULATION) {
        if let Some(string_version) = GLVersion::parse(&version_string, api) {
            if string_version != version {
                warn!(
                    "GL_VERSION {:?} disagrees with the queried version {}.{}; assuming an \
                     emulated context",
                    version_string, version.major, version.minor
                );
                return DetectedVersion { api, version: string_version, emulated: true };
            }
        }
    }

    DetectedVersion { api, version, emulated: false }
}

/// Calls `glGetString`, returning `None` if the driver returns null.
pub(crate) fn get_string(gl: &Gl, name: GLenum) -> Option<String> {
    unsafe { string_from_ptr(gl.GetString(name)) }
}

pub(crate) unsafe fn string_from_ptr(string: *const u8) -> Option<String> {
    if string.is_null() {
        return None;
    }
    Some(CStr::from_ptr(string as *const c_char).to_string_lossy().into_owned())
}

/// Calls `glGetIntegerv`, returning `Err` if the driver doesn't recognize `pname`.
pub(crate) fn get_integer(gl: &Gl, pname: GLenum) -> Result<GLint, ()> {
    unsafe {
        drain_errors(gl);
        let mut value = 0;
        gl.GetIntegerv(pname, &mut value);
        match gl.GetError() {
            glow::INVALID_ENUM => Err(()),
            _ => Ok(value),
        }
    }
}

pub(crate) fn drain_errors(gl: &Gl) {
    for _ in 0..MAX_PENDING_ERRORS {
        if unsafe { gl.GetError() } == glow::NO_ERROR {
            break;
        }
    }
}

fn clamp_version_number(number: GLint) -> u8 {
    number.clamp(0, u8::MAX as GLint) as u8
}
