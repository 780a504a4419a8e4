// glbinder/src/platform/egl.rs
//
//! Function lookup through EGL.

use super::symbol_name;
use crate::egl::Egl;
use crate::loader::Initializer;

use libc::{dlopen, dlsym, RTLD_LAZY, RTLD_LOCAL};
use log::{debug, warn};
use std::os::raw::{c_char, c_void};
use std::ptr;

static EGL_LIBRARY_NAMES: [&str; 2] = ["libEGL.so.1", "libEGL.so"];

#[cfg(android)]
static CLIENT_LIBRARY_NAMES: [&str; 1] = ["libGLESv2.so"];
#[cfg(not(android))]
static CLIENT_LIBRARY_NAMES: [&str; 4] =
    ["libGLESv2.so.2", "libGLESv2.so", "libGL.so.1", "libGL.so"];

type EGLGetProcAddressFn = unsafe extern "C" fn(*const c_char) -> *const c_void;

/// Looks functions up with `eglGetProcAddress()`.
///
/// Before EGL 1.5, `eglGetProcAddress()` need not return core functions, so those are looked up
/// in the client API library as well.
pub struct EglInitializer {
    egl_library: *mut c_void,
    client_library: *mut c_void,
    egl: Option<Egl>,
    get_proc_address: Option<EGLGetProcAddressFn>,
}

impl EglInitializer {
    pub fn new() -> EglInitializer {
        EglInitializer {
            egl_library: ptr::null_mut(),
            client_library: ptr::null_mut(),
            egl: None,
            get_proc_address: None,
        }
    }
}

impl Default for EglInitializer {
    fn default() -> EglInitializer {
        EglInitializer::new()
    }
}

impl Initializer for EglInitializer {
    fn prepare(&mut self) {
        if self.egl_library.is_null() {
            self.egl_library = open_first(&EGL_LIBRARY_NAMES);
            if self.egl_library.is_null() {
                warn!("Couldn't open the EGL library");
                return;
            }
            let egl_library = self.egl_library;
            self.egl = Some(Egl::load_with(|name| lookup(egl_library, name)));
            let pointer = lookup(egl_library, "eglGetProcAddress");
            if !pointer.is_null() {
                self.get_proc_address = Some(unsafe {
                    std::mem::transmute::<*const c_void, EGLGetProcAddressFn>(pointer)
                });
            }
        }
        if self.client_library.is_null() {
            self.client_library = open_first(&CLIENT_LIBRARY_NAMES);
        }

        if let Some(ref egl) = self.egl {
            if unsafe { egl.GetCurrentContext() }.is_null() {
                warn!("No EGL context is current; GL functions may fail to load");
            }
        }
    }

    fn get_proc_address(&mut self, symbol_name: &str) -> *const c_void {
        if let Some(get_proc_address) = self.get_proc_address {
            if let Some(name) = super::symbol_name(symbol_name) {
                let pointer = unsafe { get_proc_address(name.as_ptr()) };
                if !pointer.is_null() {
                    return pointer;
                }
            }
        }
        if self.client_library.is_null() {
            return ptr::null();
        }
        lookup(self.client_library, symbol_name)
    }
}

fn open_first(library_names: &[&str]) -> *mut c_void {
    for library_name in library_names {
        if let Some(c_library_name) = symbol_name(library_name) {
            let library = unsafe { dlopen(c_library_name.as_ptr(), RTLD_LAZY | RTLD_LOCAL) };
            if !library.is_null() {
                debug!("Opened {}", library_name);
                return library;
            }
        }
    }
    ptr::null_mut()
}

fn lookup(library: *mut c_void, name: &str) -> *const c_void {
    match symbol_name(name) {
        Some(name) => unsafe { dlsym(library, name.as_ptr()) as *const c_void },
        None => ptr::null(),
    }
}
