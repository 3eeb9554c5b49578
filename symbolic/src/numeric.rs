//! Exact rational numbers backed by 64-bit integers.
//!
//! Intermediate products are computed in 128 bits and reduced before being
//! narrowed back, so only results that genuinely leave the `i64` range fail.

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{SymbolicError, SymbolicResult};

/// A reduced fraction `num/den` with `den > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Numeric {
    num: i64,
    den: i64,
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Numeric {
    pub const ZERO: Numeric = Numeric { num: 0, den: 1 };
    pub const ONE: Numeric = Numeric { num: 1, den: 1 };
    pub const MINUS_ONE: Numeric = Numeric { num: -1, den: 1 };

    pub const fn integer(n: i64) -> Self {
        Numeric { num: n, den: 1 }
    }

    /// Build `num/den` in lowest terms.
    pub fn new(num: i64, den: i64) -> SymbolicResult<Self> {
        Self::reduce(num as i128, den as i128, "fraction")
    }

    fn reduce(num: i128, den: i128, op: &'static str) -> SymbolicResult<Self> {
        if den == 0 {
            return Err(SymbolicError::DivisionByZero);
        }
        let g = gcd(num, den).max(1);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        let num = i64::try_from(num).map_err(|_| SymbolicError::Overflow(op))?;
        let den = i64::try_from(den).map_err(|_| SymbolicError::Overflow(op))?;
        Ok(Numeric { num, den })
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    /// The value as an `i32` exponent, if it is an integer in range.
    pub fn to_i32(&self) -> Option<i32> {
        if self.is_integer() {
            i32::try_from(self.num).ok()
        } else {
            None
        }
    }

    pub fn checked_add(&self, rhs: &Numeric) -> SymbolicResult<Numeric> {
        let num = self.num as i128 * rhs.den as i128 + rhs.num as i128 * self.den as i128;
        let den = self.den as i128 * rhs.den as i128;
        Self::reduce(num, den, "addition")
    }

    pub fn checked_mul(&self, rhs: &Numeric) -> SymbolicResult<Numeric> {
        let num = self.num as i128 * rhs.num as i128;
        let den = self.den as i128 * rhs.den as i128;
        Self::reduce(num, den, "multiplication")
    }

    pub fn checked_div(&self, rhs: &Numeric) -> SymbolicResult<Numeric> {
        if rhs.is_zero() {
            return Err(SymbolicError::DivisionByZero);
        }
        let num = self.num as i128 * rhs.den as i128;
        let den = self.den as i128 * rhs.num as i128;
        Self::reduce(num, den, "division")
    }

    /// Raise to an integer power; negative exponents invert first.
    pub fn checked_pow(&self, exp: i32) -> SymbolicResult<Numeric> {
        let mut base = if exp < 0 {
            Numeric::ONE.checked_div(self)?
        } else {
            *self
        };
        if base.is_zero() || base.is_one() {
            return Ok(if exp == 0 { Numeric::ONE } else { base });
        }
        if base == Numeric::MINUS_ONE {
            return Ok(if exp % 2 == 0 { Numeric::ONE } else { base });
        }
        let mut e = exp.unsigned_abs();
        let mut acc = Numeric::ONE;
        while e > 0 {
            if e & 1 == 1 {
                acc = acc.checked_mul(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Ok(acc)
    }
}

impl From<i64> for Numeric {
    fn from(n: i64) -> Self {
        Numeric::integer(n)
    }
}

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_reduces_and_normalises_sign() {
        let n = Numeric::new(4, -6).unwrap();
        assert_eq!(n.numerator(), -2);
        assert_eq!(n.denominator(), 3);
        assert_eq!(n.to_string(), "-2/3");
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Numeric::new(1, 0), Err(SymbolicError::DivisionByZero));
        assert_eq!(
            Numeric::ONE.checked_div(&Numeric::ZERO),
            Err(SymbolicError::DivisionByZero)
        );
    }

    #[rstest]
    #[case(1, 2, 1, 3, "5/6")]
    #[case(1, 2, 1, 2, "1")]
    #[case(-1, 4, 1, 4, "0")]
    fn test_checked_add(
        #[case] a: i64,
        #[case] b: i64,
        #[case] c: i64,
        #[case] d: i64,
        #[case] expected: &str,
    ) {
        let lhs = Numeric::new(a, b).unwrap();
        let rhs = Numeric::new(c, d).unwrap();
        assert_eq!(lhs.checked_add(&rhs).unwrap().to_string(), expected);
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = Numeric::integer(i64::MAX);
        assert_eq!(
            big.checked_mul(&Numeric::integer(2)),
            Err(SymbolicError::Overflow("multiplication"))
        );
    }

    #[test]
    fn test_checked_pow() {
        let half = Numeric::new(1, 2).unwrap();
        assert_eq!(half.checked_pow(3).unwrap().to_string(), "1/8");
        assert_eq!(half.checked_pow(-2).unwrap(), Numeric::integer(4));
        assert_eq!(Numeric::integer(7).checked_pow(0).unwrap(), Numeric::ONE);
        assert_eq!(
            Numeric::ZERO.checked_pow(-1),
            Err(SymbolicError::DivisionByZero)
        );
    }

    #[rstest]
    #[case(1, "1")]
    #[case(-1, "-1")]
    #[case(0, "0")]
    fn test_pow_of_unit_bases_is_immediate(#[case] base: i64, #[case] expected: &str) {
        let start = std::time::Instant::now();
        let n = Numeric::integer(base);
        assert_eq!(n.checked_pow(i32::MAX).unwrap().to_string(), expected);
        if base != 0 {
            assert_eq!(n.checked_pow(i32::MIN).unwrap(), Numeric::ONE);
            assert_eq!(n.checked_pow(i32::MIN + 1).unwrap().to_string(), expected);
        }
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_pow_by_squaring() {
        assert_eq!(Numeric::integer(3).checked_pow(39).unwrap(), Numeric::integer(4052555153018976267));
        assert_eq!(Numeric::integer(-2).checked_pow(63).unwrap(), Numeric::integer(i64::MIN));
        assert_eq!(
            Numeric::new(-2, 3).unwrap().checked_pow(-5).unwrap().to_string(),
            "-243/32"
        );
        assert_eq!(
            Numeric::integer(2).checked_pow(i32::MAX),
            Err(SymbolicError::Overflow("multiplication"))
        );
    }

    #[test]
    fn test_ordering_across_denominators() {
        let third = Numeric::new(1, 3).unwrap();
        let half = Numeric::new(1, 2).unwrap();
        assert!(third < half);
        assert!(Numeric::integer(-1) < third);
    }
}
