// glbinder/src/platform/dl.rs
//
//! Function lookup in the system OpenGL library with `dlopen()`/`dlsym()`.

use super::symbol_name;
use crate::loader::Initializer;

use libc::{dlopen, dlsym, RTLD_LAZY, RTLD_LOCAL};
use log::{debug, warn};
use std::os::raw::{c_char, c_void};
use std::ptr;

#[cfg(macos)]
static GL_LIBRARY_NAMES: [&str; 1] = ["/System/Library/Frameworks/OpenGL.framework/OpenGL"];
#[cfg(android)]
static GL_LIBRARY_NAMES: [&str; 1] = ["libGLESv2.so"];
#[cfg(not(any(macos, android)))]
static GL_LIBRARY_NAMES: [&str; 2] = ["libGL.so.1", "libGL.so"];

static GLES_LIBRARY_NAMES: [&str; 2] = ["libGLESv2.so.2", "libGLESv2.so"];

type GetProcAddressFn = unsafe extern "C" fn(*const c_char) -> *const c_void;

/// Looks functions up in a shared library.
///
/// Where the library exports `glXGetProcAddressARB` (Linux libGL), that is asked first, since
/// libGL is not required to export extension functions directly.
///
/// The library is never closed, because the loaded functions point into it.
pub struct DlInitializer {
    library_names: &'static [&'static str],
    library: *mut c_void,
    get_proc_address: Option<GetProcAddressFn>,
}

impl DlInitializer {
    /// Looks functions up in the platform's desktop OpenGL library.
    pub fn new() -> DlInitializer {
        DlInitializer::with_library_names(&GL_LIBRARY_NAMES)
    }

    /// Looks functions up in the OpenGL ES 2.0+ client library.
    pub fn gles() -> DlInitializer {
        DlInitializer::with_library_names(&GLES_LIBRARY_NAMES)
    }

    /// Looks functions up in the first of `library_names` that can be opened.
    pub fn with_library_names(library_names: &'static [&'static str]) -> DlInitializer {
        DlInitializer { library_names, library: ptr::null_mut(), get_proc_address: None }
    }

    /// Returns true if `prepare()` found a library.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        !self.library.is_null()
    }

    fn open(&mut self) {
        for library_name in self.library_names {
            let c_library_name = match symbol_name(library_name) {
                Some(c_library_name) => c_library_name,
                None => continue,
            };
            let library = unsafe { dlopen(c_library_name.as_ptr(), RTLD_LAZY | RTLD_LOCAL) };
            if !library.is_null() {
                debug!("Loading GL functions from {}", library_name);
                self.library = library;
                return;
            }
        }
        warn!("Couldn't open any of {:?}", self.library_names);
    }

    fn lookup(&self, name: &str) -> *const c_void {
        match symbol_name(name) {
            Some(name) => unsafe { dlsym(self.library, name.as_ptr()) as *const c_void },
            None => ptr::null(),
        }
    }
}

impl Default for DlInitializer {
    fn default() -> DlInitializer {
        DlInitializer::new()
    }
}

impl Initializer for DlInitializer {
    fn prepare(&mut self) {
        if self.library.is_null() {
            self.open();
        }
        if self.get_proc_address.is_none() && !self.library.is_null() {
            let pointer = self.lookup("glXGetProcAddressARB");
            if !pointer.is_null() {
                self.get_proc_address = Some(unsafe {
                    std::mem::transmute::<*const c_void, GetProcAddressFn>(pointer)
                });
            }
        }
    }

    fn get_proc_address(&mut self, symbol_name: &str) -> *const c_void {
        if self.library.is_null() {
            return ptr::null();
        }
        if let Some(get_proc_address) = self.get_proc_address {
            if let Some(name) = super::symbol_name(symbol_name) {
                let pointer = unsafe { get_proc_address(name.as_ptr()) };
                if !pointer.is_null() {
                    return pointer;
                }
            }
        }
        self.lookup(symbol_name)
    }
}
