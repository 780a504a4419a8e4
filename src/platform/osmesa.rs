// glbinder/src/platform/osmesa.rs
//
//! Function lookup for OSMesa.

use crate::loader::Initializer;

use osmesa_sys::OSMesaGetProcAddress;
use std::os::raw::{c_char, c_void};
use std::ptr;

/// Looks functions up with `OSMesaGetProcAddress()`.
#[derive(Default)]
pub struct OSMesaInitializer;

impl Initializer for OSMesaInitializer {
    fn get_proc_address(&mut self, symbol_name: &str) -> *const c_void {
        let symbol_name = match super::symbol_name(symbol_name) {
            Some(symbol_name) => symbol_name,
            None => return ptr::null(),
        };
        unsafe {
            match OSMesaGetProcAddress(symbol_name.as_ptr() as *const u8 as *const c_char) {
                Some(pointer) => pointer as *const c_void,
                None => ptr::null(),
            }
        }
    }
}
