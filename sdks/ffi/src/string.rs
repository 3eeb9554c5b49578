//! C strings handed to callers outside the host object model.

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Allocate a C string from a Rust string.
///
/// Caller must free with [`free_c_string`].
/// Returns NULL if the string contains null bytes.
pub fn alloc_c_string(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a C string allocated by [`alloc_c_string`].
///
/// # Safety
/// s must be null or a valid pointer to a C string allocated by alloc_c_string
pub unsafe fn free_c_string(s: *mut c_char) {
    unsafe {
        if !s.is_null() {
            drop(CString::from_raw(s));
        }
    }
}
