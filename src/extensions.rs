// glbinder/src/extensions.rs
//
//! Enumeration of the extensions the driver supports.

use crate::bindings::Gl;
use crate::info::{GLApi, GLVersion};
use crate::types::GLuint;
use crate::version;

use fnv::FnvHashSet;
use log::{debug, warn};

/// The names of the extensions that the driver advertises.
pub type ExtensionSet = FnvHashSet<String>;

pub(crate) fn load(gl: &Gl, version: GLVersion, api: GLApi) -> ExtensionSet {
    if api == GLApi::GLES && version.major < 3 {
        return load_from_string(gl);
    }

    if !gl.is_loaded("glGetStringi") {
        warn!("glGetStringi is unavailable; reading GL_EXTENSIONS as a single string");
        return load_from_string(gl);
    }

    let count = match version::get_integer(gl, glow::NUM_EXTENSIONS) {
        Ok(count) => count.max(0) as GLuint,
        Err(()) => {
            warn!("GL_NUM_EXTENSIONS is unsupported; reading GL_EXTENSIONS as a single string");
            return load_from_string(gl);
        }
    };

    let mut extensions = ExtensionSet::default();
    for index in 0..count {
        let extension = unsafe { version::string_from_ptr(gl.GetStringi(glow::EXTENSIONS, index)) };
        if let Some(extension) = extension {
            extensions.insert(extension);
        }
    }
    debug!("Loaded {} indexed extensions", extensions.len());
    extensions
}

fn load_from_string(gl: &Gl) -> ExtensionSet {
    let extensions: ExtensionSet = version::get_string(gl, glow::EXTENSIONS)
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_owned)
        .collect();
    debug!("Loaded {} extensions from GL_EXTENSIONS", extensions.len());
    extensions
}
