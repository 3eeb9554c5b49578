//! Arithmetic operators for expressions and symbols.
//!
//! Operators panic where exact arithmetic is undefined or overflows; use the
//! `try_*` methods on [`Ex`] to observe those failures instead.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::ex::{Ex, raise};
use crate::symbol::Symbol;

macro_rules! impl_binary_ops {
    ($($lhs:ty),*) => {
        $(
            impl<T: Into<Ex>> Add<T> for $lhs {
                type Output = Ex;
                fn add(self, rhs: T) -> Ex {
                    raise(Ex::from(self).try_add(&rhs.into()))
                }
            }

            impl<T: Into<Ex>> Sub<T> for $lhs {
                type Output = Ex;
                fn sub(self, rhs: T) -> Ex {
                    raise(Ex::from(self).try_sub(&rhs.into()))
                }
            }

            impl<T: Into<Ex>> Mul<T> for $lhs {
                type Output = Ex;
                fn mul(self, rhs: T) -> Ex {
                    raise(Ex::from(self).try_mul(&rhs.into()))
                }
            }

            impl<T: Into<Ex>> Div<T> for $lhs {
                type Output = Ex;
                fn div(self, rhs: T) -> Ex {
                    raise(Ex::from(self).try_div(&rhs.into()))
                }
            }

            impl Neg for $lhs {
                type Output = Ex;
                fn neg(self) -> Ex {
                    raise(Ex::from(self).try_neg())
                }
            }
        )*
    };
}

impl_binary_ops!(Ex, &Ex, Symbol, &Symbol);

// Integer on the left: `2 * x`, `41 + e`.
macro_rules! impl_scalar_lhs_ops {
    ($($rhs:ty),*) => {
        $(
            impl Add<$rhs> for i64 {
                type Output = Ex;
                fn add(self, rhs: $rhs) -> Ex {
                    raise(Ex::from(self).try_add(&Ex::from(rhs)))
                }
            }

            impl Sub<$rhs> for i64 {
                type Output = Ex;
                fn sub(self, rhs: $rhs) -> Ex {
                    raise(Ex::from(self).try_sub(&Ex::from(rhs)))
                }
            }

            impl Mul<$rhs> for i64 {
                type Output = Ex;
                fn mul(self, rhs: $rhs) -> Ex {
                    raise(Ex::from(self).try_mul(&Ex::from(rhs)))
                }
            }

            impl Div<$rhs> for i64 {
                type Output = Ex;
                fn div(self, rhs: $rhs) -> Ex {
                    raise(Ex::from(self).try_div(&Ex::from(rhs)))
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(Ex, &Ex, Symbol, &Symbol);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_operands() {
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        let e = &x + 2 * &y;
        assert_eq!(e.to_string(), "x+2*y");
        assert_eq!((e.clone() - &x).to_string(), "2*y");
        assert_eq!(-(&x) * &x, -(x.clone() * &x));
    }

    #[test]
    fn test_rational_coefficients() {
        let x = Symbol::new("x");
        let e = &x / 3 + &x / 6;
        assert_eq!(e.to_string(), "1/2*x");
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_operator_division_by_zero_panics() {
        let x = Symbol::new("x");
        let _ = &x / 0;
    }
}
