//! Generated by `symbridge-codegen generate interface/symbol.yml`.

use symbolic::Symbol;
use crate::classes::NativeSymbol;

symbridge_ffi::bindings! {
    /// A fresh symbol; equal names still make distinct symbols.
    constructor fn Symbolic_Symbol_mk(name: &str) -> Box<NativeSymbol> {
        Box::new(NativeSymbol(Symbol::new(name)))
    }
    constructor fn Symbolic_Symbol_mkWithTex(name: &str, tex: &str) -> Box<NativeSymbol> {
        Box::new(NativeSymbol(Symbol::with_tex_name(name, tex)))
    }
    method fn Symbolic_Symbol_name(this: &NativeSymbol) -> String {
        String::from(this.0.name())
    }
    method fn Symbolic_Symbol_texName(this: &NativeSymbol) -> String {
        this.0.tex_name()
    }
    method fn Symbolic_Symbol_serial(this: &NativeSymbol) -> u64 {
        this.0.serial()
    }
}
