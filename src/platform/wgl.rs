// glbinder/src/platform/wgl.rs
//
//! Function lookup through WGL.

use crate::loader::Initializer;

use log::warn;
use std::os::raw::c_void;
use std::ptr;
use winapi::shared::minwindef::HMODULE;
use winapi::um::libloaderapi;
use winapi::um::wingdi;
use winapi::um::winnt::LPCSTR;

/// Looks functions up with `wglGetProcAddress()`.
///
/// `wglGetProcAddress()` only knows about functions newer than OpenGL 1.1; the rest are exported
/// by `opengl32.dll` itself.
pub struct WglInitializer {
    opengl32: HMODULE,
}

impl WglInitializer {
    pub fn new() -> WglInitializer {
        WglInitializer { opengl32: ptr::null_mut() }
    }
}

impl Default for WglInitializer {
    fn default() -> WglInitializer {
        WglInitializer::new()
    }
}

impl Initializer for WglInitializer {
    fn prepare(&mut self) {
        unsafe {
            if self.opengl32.is_null() {
                self.opengl32 =
                    libloaderapi::LoadLibraryA(&b"opengl32.dll\0"[0] as *const u8 as LPCSTR);
                if self.opengl32.is_null() {
                    warn!("Couldn't load opengl32.dll");
                }
            }
            if wingdi::wglGetCurrentContext().is_null() {
                warn!("No WGL context is current; GL functions may fail to load");
            }
        }
    }

    fn get_proc_address(&mut self, symbol_name: &str) -> *const c_void {
        let name = match super::symbol_name(symbol_name) {
            Some(name) => name,
            None => return ptr::null(),
        };
        unsafe {
            // Some drivers return small sentinel values instead of null on failure.
            match wingdi::wglGetProcAddress(name.as_ptr()) as isize {
                -1 | 0 | 1 | 2 | 3 => {}
                pointer => return pointer as *const c_void,
            }
            if self.opengl32.is_null() {
                return ptr::null();
            }
            libloaderapi::GetProcAddress(self.opengl32, name.as_ptr()) as *const c_void
        }
    }
}
