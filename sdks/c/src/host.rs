//! Host primitives for C callers.
//!
//! Thin exports over the host object model so a C host (and the tests) can
//! build arguments, read results and manage reference counts.

use std::os::raw::c_char;

use symbridge_ffi::host::{self, ObjArg, ObjRes};

/// Make a host string from a NUL-terminated buffer. NULL makes "".
#[unsafe(no_mangle)]
pub unsafe extern "C" fn symbridge_host_mk_string(s: *const c_char) -> ObjRes {
    if s.is_null() {
        tracing::warn!("symbridge_host_mk_string called with NULL");
        return host::mk_string("");
    }
    unsafe { host::mk_string_from_c(s) }
}

/// Contents of a host string; valid while the string lives.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn symbridge_host_string_cstr(o: ObjArg) -> *const c_char {
    unsafe { host::string_cstr(o) }
}

#[unsafe(no_mangle)]
pub extern "C" fn symbridge_host_box_int(v: i64) -> ObjRes {
    host::box_int(v)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn symbridge_host_unbox_int(o: ObjArg) -> i64 {
    unsafe { host::unbox_int(o) }
}

#[unsafe(no_mangle)]
pub extern "C" fn symbridge_host_box_scalar(n: usize) -> ObjRes {
    host::box_scalar(n)
}

#[unsafe(no_mangle)]
pub extern "C" fn symbridge_host_is_scalar(o: ObjArg) -> bool {
    host::is_scalar(o)
}

#[unsafe(no_mangle)]
pub extern "C" fn symbridge_host_unbox_scalar(o: ObjArg) -> usize {
    host::unbox_scalar(o)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn symbridge_host_inc_ref(o: ObjArg) {
    unsafe { host::inc_ref(o) }
}

/// Release one reference. The last release of a handle runs its finalizer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn symbridge_host_dec_ref(o: ObjRes) {
    unsafe { host::dec_ref(o) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn symbridge_host_io_result_is_ok(o: ObjArg) -> bool {
    unsafe { host::io_result_is_ok(o) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn symbridge_host_io_result_value(o: ObjArg) -> ObjArg {
    unsafe { host::io_result_value(o) }
}

/// Heap objects currently alive.
#[unsafe(no_mangle)]
pub extern "C" fn symbridge_host_live_objects() -> usize {
    host::live_objects()
}
