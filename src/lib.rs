// glbinder/src/lib.rs
//
//! Runtime OpenGL and OpenGL ES function loading.
//!
//! The set of entry points a driver actually exposes depends on its version, its profile (desktop
//! OpenGL or OpenGL ES), and the extensions it advertises. This crate negotiates all three once a
//! context is current, then resolves every function in its static table, falling back to
//! extension-suffixed entry points where the core version is too old. Functions that cannot be
//! resolved are replaced by stubs that fail with a descriptive message only when called, so a
//! missing function never prevents initialization.
//!
//! ```ignore
//! use glbinder::{Loader, LoaderAttributes};
//! use glbinder::platform::dl::DlInitializer;
//!
//! let mut loader = Loader::new(LoaderAttributes::default());
//! loader.initialize(&mut DlInitializer::new())?;
//! if loader.is_version_at_least(3, 0)? {
//!     unsafe { loader.gl()?.GenVertexArrays(1, &mut vao) };
//! }
//! ```

#[macro_use]
mod macros;

pub mod error;
pub use crate::error::{Error, GLError};

mod info;
pub use crate::info::{GLApi, GLVersion};

pub mod types;

mod requirement;
pub use crate::requirement::{Requirement, SymbolInfo};

mod stub;
pub use crate::stub::{FailureReason, SymbolStatus};

mod bindings;
pub use crate::bindings::Gl;

mod extensions;
pub use crate::extensions::ExtensionSet;

mod version;
mod resolver;

mod loader;
pub use crate::loader::{FnInitializer, Initializer, Loader, LoaderAttributes, LoaderFlags};
pub use crate::loader::Negotiated;

pub mod platform;

#[cfg(any(linux, android))]
#[allow(non_camel_case_types)]
mod egl {
    use std::os::raw::{c_long, c_void};
    pub type khronos_utime_nanoseconds_t = khronos_uint64_t;
    pub type khronos_uint64_t = u64;
    pub type khronos_ssize_t = c_long;
    pub type EGLint = i32;
    pub type EGLNativeDisplayType = *const c_void;
    pub type EGLNativePixmapType = *const c_void;
    pub type EGLNativeWindowType = *const c_void;
    pub type NativeDisplayType = EGLNativeDisplayType;
    pub type NativePixmapType = EGLNativePixmapType;
    pub type NativeWindowType = EGLNativeWindowType;
    include!(concat!(env!("OUT_DIR"), "/egl_bindings.rs"));
}

#[cfg(test)]
mod tests;
