// glbinder/src/platform/mod.rs
//
//! `Initializer`s for the common ways of looking up OpenGL functions.
//!
//! Creating the context and making it current is up to the windowing system; these only find
//! function addresses once that is done.

#[cfg(unix)]
pub mod dl;

#[cfg(any(linux, android))]
pub mod egl;

#[cfg(windows)]
pub mod wgl;

#[cfg(feature = "sm-osmesa")]
pub mod osmesa;

use std::ffi::CString;

/// Converts a symbol name for the C APIs. Names with interior NULs can't exist in any library.
pub(crate) fn symbol_name(name: &str) -> Option<CString> {
    CString::new(name).ok()
}
