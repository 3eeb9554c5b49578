//! Host-side helpers shared by the binding tests.
#![allow(dead_code)]

use symbridge_ffi::host::{self, ObjRes};

/// An owned host object, released on drop like a host variable going out of scope.
pub struct Owned(pub ObjRes);

impl Owned {
    pub fn obj(&self) -> ObjRes {
        self.0
    }

    pub fn string(&self) -> String {
        unsafe { host::string_str(self.0) }.to_string()
    }

    pub fn int(&self) -> i64 {
        unsafe { host::unbox_int(self.0) }
    }
}

impl Drop for Owned {
    fn drop(&mut self) {
        unsafe { host::dec_ref(self.0) };
    }
}

pub fn string(s: &str) -> Owned {
    Owned(host::mk_string(s))
}

pub fn int(v: i64) -> Owned {
    Owned(host::box_int(v))
}

/// Take ownership of a binding result.
pub fn own(obj: ObjRes) -> Owned {
    Owned(obj)
}
