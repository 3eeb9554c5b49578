//! Host-visible classes.
//!
//! Each wrapped type gets a local newtype so it can carry its host class
//! registration. The newtype is what a handle owns.

use std::ops::Deref;

use symbolic::{Ex, Symbol};
use symbridge_ffi::native_class;

pub struct NativeSymbol(pub Symbol);

native_class!(NativeSymbol, "Symbolic.Symbol");

pub struct NativeEx(pub Ex);

native_class!(NativeEx, "Symbolic.Ex");

impl Deref for NativeSymbol {
    type Target = Symbol;

    fn deref(&self) -> &Symbol {
        &self.0
    }
}

impl Deref for NativeEx {
    type Target = Ex;

    fn deref(&self) -> &Ex {
        &self.0
    }
}
