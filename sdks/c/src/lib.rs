//! C bindings for the symbolic library
//!
//! Every `Symbolic_*` export takes its arguments as borrowed host objects and
//! returns one owned host object. Handles are released with
//! `symbridge_host_dec_ref`, which runs the native destructor on the last
//! reference.
//!
//! # Safety
//!
//! All exports dereference host object pointers passed from C; callers must
//! pass live objects of the declared kinds.

#![allow(clippy::missing_safety_doc)]

use std::os::raw::c_char;

use symbolic::{Ex, Symbol};
use symbridge_ffi::BindingDescriptor;

pub mod classes;
pub mod ex;
pub mod functions;
pub mod host;
pub mod symbol;

/// All bindings exported by this library.
pub fn descriptor_table() -> Vec<BindingDescriptor> {
    [symbol::DESCRIPTORS, ex::DESCRIPTORS, functions::DESCRIPTORS].concat()
}

/// `sin(x+2*y)+3*z+41`, plus one.
pub fn sample_expression() -> Ex {
    let x = Symbol::new("x");
    let y = Symbol::new("y");
    let z = Symbol::new("z");
    let e = (&x + 2 * &y).sin() + 3 * &z + 41;
    e + 1
}

pub fn print_sample() {
    println!("{}", sample_expression());
}

/// Get symbridge version string
#[unsafe(no_mangle)]
pub extern "C" fn symbridge_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr().cast()
}

/// Descriptor table as JSON. Free with `symbridge_free_string`; NULL on failure.
#[unsafe(no_mangle)]
pub extern "C" fn symbridge_descriptor_table_json() -> *mut c_char {
    match symbridge_ffi::json::descriptor_table_json(&descriptor_table()) {
        Ok(json) => symbridge_ffi::string::alloc_c_string(&json),
        Err(e) => {
            tracing::error!("{}", e);
            std::ptr::null_mut()
        }
    }
}

/// Free a string returned by this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn symbridge_free_string(s: *mut c_char) {
    unsafe { symbridge_ffi::string::free_c_string(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_sample_expression() {
        assert_eq!(sample_expression().to_string(), "3*z+sin(x+2*y)+42");
    }

    #[test]
    fn test_version() {
        let version = unsafe { CStr::from_ptr(symbridge_version()) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_descriptor_table_is_complete() {
        let table = descriptor_table();
        assert_eq!(table.len(), 5 + 20 + 3);
        let mut symbols: Vec<_> = table.iter().map(|d| d.symbol).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), table.len());
    }

    #[test]
    fn test_descriptor_table_json() {
        let raw = symbridge_descriptor_table_json();
        assert!(!raw.is_null());
        let text = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_string();
        unsafe { symbridge_free_string(raw) };
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), descriptor_table().len());
    }
}
