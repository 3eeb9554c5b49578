//! Boxed Handle Protocol.
//!
//! A native object is moved into a heap allocation and that allocation's
//! address is embedded in exactly one host external object. The host's last
//! `dec_ref` runs [`finalize`], which rebuilds the `Box` and drops it.
//!
//! Taking the object as `Box<T>` by value means a given allocation can only
//! be boxed once: ownership moves into the handle.

use std::ffi::c_void;

use crate::host::{self, ExternalClass, ObjArg, ObjRes};

/// A native type that can live behind a host handle.
///
/// Implement with [`native_class!`](crate::native_class), which registers the
/// class with the host on first use.
pub trait NativeClass: Sized + 'static {
    /// Host-visible class name, e.g. `Symbolic.Symbol`.
    const NAME: &'static str;

    fn external_class() -> &'static ExternalClass;
}

/// Implement [`NativeClass`] for a type, registering its finalizer once.
#[macro_export]
macro_rules! native_class {
    ($ty:ty, $name:expr) => {
        impl $crate::handle::NativeClass for $ty {
            const NAME: &'static str = $name;

            fn external_class() -> &'static $crate::host::ExternalClass {
                static CLASS: ::std::sync::OnceLock<&'static $crate::host::ExternalClass> =
                    ::std::sync::OnceLock::new();
                CLASS.get_or_init(|| {
                    $crate::host::register_external_class($name, $crate::handle::finalize::<$ty>)
                })
            }
        }
    };
}

/// Finalizer for handles holding a `T`.
///
/// # Safety
/// `data` must come from [`box_native::<T>`] and must not be used afterwards.
pub unsafe extern "C" fn finalize<T: NativeClass>(data: *mut c_void) {
    unsafe { drop(Box::from_raw(data.cast::<T>())) };
}

/// Move a native object into a new host handle.
pub fn box_native<T: NativeClass>(object: Box<T>) -> ObjRes {
    host::alloc_external(T::external_class(), Box::into_raw(object).cast())
}

/// Raw pointer embedded in a handle, reinterpreted as `T`.
///
/// # Safety
/// `handle` must be a live handle produced by [`box_native::<T>`]. No type
/// check is made in release builds.
pub unsafe fn unbox_ptr<T: NativeClass>(handle: ObjArg) -> *mut T {
    debug_assert!(
        std::ptr::eq(unsafe { host::external_class(handle) }, T::external_class()),
        "handle does not hold a {}",
        T::NAME
    );
    unsafe { host::external_data(handle) }.cast()
}

/// Borrow the native object behind a handle.
///
/// # Safety
/// As for [`unbox_ptr`]; additionally the borrow must end before the handle's
/// last reference is released.
pub unsafe fn unbox_native<'a, T: NativeClass>(handle: ObjArg) -> &'a T {
    unsafe { &*unbox_ptr::<T>(handle) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test double that records its own destruction.
    struct Tracked {
        id: usize,
        drops: Arc<Mutex<Vec<usize>>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.lock().unwrap().push(self.id);
        }
    }

    crate::native_class!(Tracked, "Test.Tracked");

    struct Other(#[allow(dead_code)] u8);

    crate::native_class!(Other, "Test.Other");

    #[test]
    fn test_round_trip_identity() {
        let drops = Arc::new(Mutex::new(Vec::new()));
        let object = Box::new(Tracked {
            id: 1,
            drops: drops.clone(),
        });
        let raw: *const Tracked = &*object;
        let handle = box_native(object);
        unsafe {
            assert_eq!(unbox_ptr::<Tracked>(handle) as *const Tracked, raw);
            assert_eq!(unbox_native::<Tracked>(handle).id, 1);
            host::dec_ref(handle);
        }
        assert_eq!(*drops.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_n_handles_n_finalizations() {
        let drops = Arc::new(Mutex::new(Vec::new()));
        let handles: Vec<ObjRes> = (0..16)
            .map(|id| {
                box_native(Box::new(Tracked {
                    id,
                    drops: drops.clone(),
                }))
            })
            .collect();
        assert!(drops.lock().unwrap().is_empty());

        for handle in handles.iter().rev() {
            unsafe { host::dec_ref(*handle) };
        }

        let mut finalized = drops.lock().unwrap().clone();
        finalized.sort();
        assert_eq!(finalized, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_shared_handle_finalizes_after_last_release() {
        let drops = Arc::new(Mutex::new(Vec::new()));
        let handle = box_native(Box::new(Tracked {
            id: 7,
            drops: drops.clone(),
        }));
        unsafe {
            host::inc_ref(handle);
            host::dec_ref(handle);
            assert!(drops.lock().unwrap().is_empty());
            host::dec_ref(handle);
        }
        assert_eq!(*drops.lock().unwrap(), vec![7]);
    }

    #[test]
    fn test_classes_register_once() {
        assert!(std::ptr::eq(Tracked::external_class(), Tracked::external_class()));
        assert!(!std::ptr::eq(Tracked::external_class(), Other::external_class()));
        assert_eq!(Other::external_class().name(), "Test.Other");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "handle does not hold a Test.Tracked")]
    fn test_debug_builds_catch_type_confusion() {
        let handle = box_native(Box::new(Other(0)));
        unsafe {
            unbox_ptr::<Tracked>(handle);
        }
    }
}
