//! Host object model.
//!
//! The bridge targets a reference-counted host runtime whose values are either
//! tagged scalars (odd pointer values, never allocated) or heap objects with an
//! atomic reference count. Heap objects are strings, 64-bit integers, external
//! objects (an opaque native pointer plus the class whose finalizer releases
//! it) and IO results.
//!
//! Argument conventions follow the host ABI: an [`ObjArg`] is borrowed for the
//! duration of a call, an [`ObjRes`] carries one reference owned by the
//! receiver.

use std::ffi::{CStr, c_char, c_void};
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering, fence};

/// Borrowed host object argument.
pub type ObjArg = *mut HostObject;

/// Owned host object result.
pub type ObjRes = *mut HostObject;

/// Finalizer registered with an external class. Receives the embedded native
/// pointer exactly once.
pub type FinalizeFn = unsafe extern "C" fn(*mut c_void);

/// Host-side description of one wrapped native class.
#[derive(Debug)]
pub struct ExternalClass {
    name: &'static str,
    finalize: FinalizeFn,
    live: AtomicUsize,
}

impl ExternalClass {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of external objects of this class not yet finalized.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }
}

pub struct HostObject {
    rc: AtomicUsize,
    body: Body,
}

enum Body {
    /// UTF-8 bytes followed by a NUL terminator.
    String(Box<[u8]>),
    Int(i64),
    External {
        class: &'static ExternalClass,
        data: *mut c_void,
    },
    IoOk(ObjRes),
}

/// Register a native class with the host. The returned class lives for the
/// rest of the process.
pub fn register_external_class(name: &'static str, finalize: FinalizeFn) -> &'static ExternalClass {
    tracing::debug!(class = name, "registering external class");
    Box::leak(Box::new(ExternalClass {
        name,
        finalize,
        live: AtomicUsize::new(0),
    }))
}

static LIVE_OBJECTS: AtomicUsize = AtomicUsize::new(0);

/// Heap objects allocated and not yet freed, across all kinds.
pub fn live_objects() -> usize {
    LIVE_OBJECTS.load(Ordering::Acquire)
}

fn alloc(body: Body) -> ObjRes {
    LIVE_OBJECTS.fetch_add(1, Ordering::AcqRel);
    Box::into_raw(Box::new(HostObject {
        rc: AtomicUsize::new(1),
        body,
    }))
}

/// Whether `o` is a tagged scalar rather than a heap object.
pub fn is_scalar(o: ObjArg) -> bool {
    o.addr() & 1 == 1
}

/// Encode a small unsigned value as a tagged scalar.
pub fn box_scalar(n: usize) -> ObjRes {
    ptr::without_provenance_mut((n << 1) | 1)
}

pub fn unbox_scalar(o: ObjArg) -> usize {
    o.addr() >> 1
}

/// The host's unit value.
pub fn unit() -> ObjRes {
    box_scalar(0)
}

/// # Safety
/// `o` must be a scalar or a live heap object.
pub unsafe fn inc_ref(o: ObjArg) {
    if is_scalar(o) {
        return;
    }
    unsafe {
        (*o).rc.fetch_add(1, Ordering::Relaxed);
    }
}

/// Drop one reference; the last one frees the object and, for external
/// objects, runs the class finalizer on the embedded pointer.
///
/// # Safety
/// `o` must be a scalar or a live heap object on which the caller owns a
/// reference. The object must not be used after its last reference is dropped.
pub unsafe fn dec_ref(o: ObjRes) {
    if is_scalar(o) {
        return;
    }
    unsafe {
        if (*o).rc.fetch_sub(1, Ordering::Release) != 1 {
            return;
        }
        fence(Ordering::Acquire);
        let object = Box::from_raw(o);
        LIVE_OBJECTS.fetch_sub(1, Ordering::AcqRel);
        match object.body {
            Body::External { class, data } => {
                tracing::debug!(class = class.name, "finalizing external object");
                (class.finalize)(data);
                class.live.fetch_sub(1, Ordering::AcqRel);
            }
            Body::IoOk(value) => dec_ref(value),
            Body::String(_) | Body::Int(_) => {}
        }
    }
}

/// Current reference count; scalars report `usize::MAX`.
///
/// # Safety
/// `o` must be a scalar or a live heap object.
pub unsafe fn ref_count(o: ObjArg) -> usize {
    if is_scalar(o) {
        return usize::MAX;
    }
    unsafe { (*o).rc.load(Ordering::Acquire) }
}

/// Make a new host string holding a copy of `s`.
pub fn mk_string(s: &str) -> ObjRes {
    let mut bytes = Vec::with_capacity(s.len() + 1);
    bytes.extend_from_slice(s.as_bytes());
    bytes.push(0);
    alloc(Body::String(bytes.into_boxed_slice()))
}

/// Make a new host string from a NUL-terminated C buffer. Invalid UTF-8 is
/// replaced with U+FFFD.
///
/// # Safety
/// `s` must be a valid NUL-terminated buffer.
pub unsafe fn mk_string_from_c(s: *const c_char) -> ObjRes {
    let bytes = unsafe { CStr::from_ptr(s) };
    mk_string(&bytes.to_string_lossy())
}

unsafe fn string_bytes<'a>(o: ObjArg) -> &'a [u8] {
    match unsafe { &(*o).body } {
        Body::String(bytes) => bytes,
        _ => panic!("host object is not a string"),
    }
}

/// Borrow the contents of a host string up to its first NUL byte.
///
/// # Safety
/// `o` must be a live host string that outlives the returned borrow.
pub unsafe fn string_str<'a>(o: ObjArg) -> &'a str {
    let bytes = unsafe { string_bytes(o) };
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    std::str::from_utf8(&bytes[..end]).unwrap_or_default()
}

/// Pointer to the NUL-terminated contents of a host string.
///
/// # Safety
/// `o` must be a live host string; the pointer is valid while it lives.
pub unsafe fn string_cstr(o: ObjArg) -> *const c_char {
    unsafe { string_bytes(o) }.as_ptr().cast()
}

/// Make a fresh host integer.
pub fn box_int(v: i64) -> ObjRes {
    alloc(Body::Int(v))
}

/// Read a host integer. Tagged scalars read as their (non-negative) value.
///
/// # Safety
/// `o` must be a scalar or a live host integer.
pub unsafe fn unbox_int(o: ObjArg) -> i64 {
    if is_scalar(o) {
        return unbox_scalar(o) as i64;
    }
    match unsafe { &(*o).body } {
        Body::Int(v) => *v,
        _ => panic!("host object is not an integer"),
    }
}

/// Wrap a native pointer in a new external object of `class`.
pub fn alloc_external(class: &'static ExternalClass, data: *mut c_void) -> ObjRes {
    class.live.fetch_add(1, Ordering::AcqRel);
    alloc(Body::External { class, data })
}

/// # Safety
/// `o` must be a live external object.
pub unsafe fn external_data(o: ObjArg) -> *mut c_void {
    match unsafe { &(*o).body } {
        Body::External { data, .. } => *data,
        _ => panic!("host object is not an external object"),
    }
}

/// # Safety
/// `o` must be a live external object.
pub unsafe fn external_class(o: ObjArg) -> &'static ExternalClass {
    match unsafe { &(*o).body } {
        Body::External { class, .. } => *class,
        _ => panic!("host object is not an external object"),
    }
}

/// Successful IO result carrying `value`; takes ownership of `value`.
pub fn io_result_ok(value: ObjRes) -> ObjRes {
    alloc(Body::IoOk(value))
}

/// # Safety
/// `o` must be a scalar or a live heap object.
pub unsafe fn io_result_is_ok(o: ObjArg) -> bool {
    !is_scalar(o) && matches!(unsafe { &(*o).body }, Body::IoOk(_))
}

/// Borrow the value carried by a successful IO result.
///
/// # Safety
/// `o` must be a live IO result.
pub unsafe fn io_result_value(o: ObjArg) -> ObjArg {
    match unsafe { &(*o).body } {
        Body::IoOk(value) => *value,
        _ => panic!("host object is not an IO result"),
    }
}
