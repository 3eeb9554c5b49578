//! Marshalling Conventions.
//!
//! [`FromHost`] reads a borrowed host argument into a native parameter type,
//! [`IntoHost`] turns a native result into an owned host object. Each carries
//! the [`ValueKind`] it stands for, which is what descriptors are built from.
//!
//! | kind    | host → native                  | native → host          |
//! |---------|--------------------------------|------------------------|
//! | integer | `as` cast, truncating          | fresh host integer     |
//! | string  | call-scoped borrow             | new host string (copy) |
//! | handle  | `unbox_native` (borrow)        | `box_native` (move)    |

use std::ffi::CStr;

use crate::descriptor::{IntWidth, ValueKind};
use crate::handle::{self, NativeClass};
use crate::host::{self, ObjArg, ObjRes};

pub trait FromHost: Sized {
    const KIND: ValueKind;

    /// # Safety
    /// `obj` must be a live host object of kind [`Self::KIND`], and must
    /// outlive any borrow in the returned value.
    unsafe fn from_host(obj: ObjArg) -> Self;
}

pub trait IntoHost {
    const KIND: ValueKind;

    fn into_host(self) -> ObjRes;
}

macro_rules! int_marshal {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl FromHost for $ty {
                const KIND: ValueKind = ValueKind::Integer(IntWidth::$width);

                unsafe fn from_host(obj: ObjArg) -> Self {
                    unsafe { host::unbox_int(obj) as $ty }
                }
            }

            impl IntoHost for $ty {
                const KIND: ValueKind = ValueKind::Integer(IntWidth::$width);

                fn into_host(self) -> ObjRes {
                    host::box_int(self as i64)
                }
            }
        )*
    };
}

int_marshal!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    isize => Isize,
    usize => Usize,
);

// Strings stop at the first NUL byte.
impl<'a> FromHost for &'a str {
    const KIND: ValueKind = ValueKind::String;

    unsafe fn from_host(obj: ObjArg) -> Self {
        unsafe { host::string_str(obj) }
    }
}

impl<'a> FromHost for &'a CStr {
    const KIND: ValueKind = ValueKind::String;

    unsafe fn from_host(obj: ObjArg) -> Self {
        unsafe { CStr::from_ptr(host::string_cstr(obj)) }
    }
}

impl IntoHost for String {
    const KIND: ValueKind = ValueKind::String;

    fn into_host(self) -> ObjRes {
        host::mk_string(&self)
    }
}

impl IntoHost for &str {
    const KIND: ValueKind = ValueKind::String;

    fn into_host(self) -> ObjRes {
        host::mk_string(self)
    }
}

impl<'a, T: NativeClass> FromHost for &'a T {
    const KIND: ValueKind = ValueKind::Handle(T::NAME);

    unsafe fn from_host(obj: ObjArg) -> Self {
        unsafe { handle::unbox_native(obj) }
    }
}

impl<T: NativeClass> IntoHost for Box<T> {
    const KIND: ValueKind = ValueKind::Handle(T::NAME);

    fn into_host(self) -> ObjRes {
        handle::box_native(self)
    }
}

impl IntoHost for () {
    const KIND: ValueKind = ValueKind::Unit;

    fn into_host(self) -> ObjRes {
        host::io_result_ok(host::unit())
    }
}
