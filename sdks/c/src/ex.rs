//! Generated by `symbridge-codegen generate interface/ex.yml`.

use symbolic::Ex;
use crate::classes::NativeEx;
use crate::classes::NativeSymbol;

symbridge_ffi::bindings! {
    constructor fn Symbolic_Ex_ofSymbol(s: &NativeSymbol) -> Box<NativeEx> {
        Box::new(NativeEx(Ex::from(&s.0)))
    }
    constructor fn Symbolic_Ex_ofInt(n: i64) -> Box<NativeEx> {
        Box::new(NativeEx(Ex::from(n)))
    }
    /// The exact fraction num/den. A zero denominator is fatal.
    constructor fn Symbolic_Ex_ofFrac(num: i64, den: i64) -> Box<NativeEx> {
        Box::new(NativeEx(Ex::numeric(num, den)))
    }
    method fn Symbolic_Ex_add(this: &NativeEx, other: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(&this.0 + &other.0))
    }
    method fn Symbolic_Ex_sub(this: &NativeEx, other: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(&this.0 - &other.0))
    }
    method fn Symbolic_Ex_mul(this: &NativeEx, other: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(&this.0 * &other.0))
    }
    method fn Symbolic_Ex_div(this: &NativeEx, other: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(&this.0 / &other.0))
    }
    method fn Symbolic_Ex_neg(this: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(-(&this.0)))
    }
    method fn Symbolic_Ex_pow(this: &NativeEx, exp: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(this.0.pow(&exp.0)))
    }
    method fn Symbolic_Ex_powInt(this: &NativeEx, n: i32) -> Box<NativeEx> {
        Box::new(NativeEx(this.0.pow(n)))
    }
    method fn Symbolic_Ex_sin(this: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(this.0.sin()))
    }
    method fn Symbolic_Ex_cos(this: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(this.0.cos()))
    }
    method fn Symbolic_Ex_exp(this: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(this.0.exp()))
    }
    method fn Symbolic_Ex_log(this: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(this.0.log()))
    }
    method fn Symbolic_Ex_subs(this: &NativeEx, s: &NativeSymbol, e: &NativeEx) -> Box<NativeEx> {
        Box::new(NativeEx(this.0.subs(&s.0, &e.0)))
    }
    method fn Symbolic_Ex_diff(this: &NativeEx, s: &NativeSymbol) -> Box<NativeEx> {
        Box::new(NativeEx(this.0.diff(&s.0)))
    }
    method fn Symbolic_Ex_equal(this: &NativeEx, other: &NativeEx) -> u8 {
        (&this.0 == &other.0) as u8
    }
    method fn Symbolic_Ex_isZero(this: &NativeEx) -> u8 {
        (this.0.is_zero()) as u8
    }
    method fn Symbolic_Ex_nops(this: &NativeEx) -> usize {
        this.0.nops()
    }
    method fn Symbolic_Ex_toString(this: &NativeEx) -> String {
        this.0.to_string()
    }
}
