//! The expression type and its canonicalising constructors.
//!
//! Canonical forms:
//! - sums are `Σ coeff·rest + constant`, terms keyed and sorted by `rest`,
//!   no zero coefficients, never a lone term with a zero constant;
//! - products are `coeff · Π base^exp`, factors sorted by base, a numeric
//!   coefficient in front of a single sum is distributed into it;
//! - powers with an exact integer exponent of a number, power or product are
//!   evaluated.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::{SymbolicError, SymbolicResult};
use crate::function::Function;
use crate::numeric::Numeric;
use crate::symbol::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Node {
    Num(Numeric),
    Sym(Symbol),
    Func(Function, Ex),
    Pow(Ex, Ex),
    Mul(Vec<(Ex, Ex)>, Numeric),
    Add(Vec<(Ex, Numeric)>, Numeric),
}

/// An immutable symbolic expression. Cloning shares the node tree.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ex(Arc<Node>);

/// Turn a failed exact computation into a native fatal error.
pub(crate) fn raise<T>(result: SymbolicResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

impl Ex {
    pub(crate) fn from_node(node: Node) -> Ex {
        Ex(Arc::new(node))
    }

    pub(crate) fn node(&self) -> &Node {
        &self.0
    }

    pub fn zero() -> Ex {
        Ex::from(Numeric::ZERO)
    }

    pub fn one() -> Ex {
        Ex::from(Numeric::ONE)
    }

    /// The exact fraction `num/den`.
    pub fn frac(num: i64, den: i64) -> SymbolicResult<Ex> {
        Numeric::new(num, den).map(Ex::from)
    }

    /// Like [`Ex::frac`], panicking on a zero denominator.
    pub fn numeric(num: i64, den: i64) -> Ex {
        raise(Ex::frac(num, den))
    }

    pub fn as_numeric(&self) -> Option<&Numeric> {
        match self.node() {
            Node::Num(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self.node() {
            Node::Sym(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_numeric().is_some_and(Numeric::is_zero)
    }

    pub fn is_one(&self) -> bool {
        self.as_numeric().is_some_and(Numeric::is_one)
    }

    /// Number of operands: terms of a sum (the constant counts when non-zero),
    /// factors of a product (the coefficient counts when not one), 2 for a
    /// power, 1 for a function and 0 for atoms.
    pub fn nops(&self) -> usize {
        match self.node() {
            Node::Num(_) | Node::Sym(_) => 0,
            Node::Func(..) => 1,
            Node::Pow(..) => 2,
            Node::Mul(factors, c) => factors.len() + usize::from(!c.is_one()),
            Node::Add(terms, c) => terms.len() + usize::from(!c.is_zero()),
        }
    }

    /// The `i`-th operand in the order documented on [`Ex::nops`].
    pub fn op(&self, i: usize) -> Option<Ex> {
        match self.node() {
            Node::Num(_) | Node::Sym(_) => None,
            Node::Func(_, arg) => (i == 0).then(|| arg.clone()),
            Node::Pow(base, exp) => match i {
                0 => Some(base.clone()),
                1 => Some(exp.clone()),
                _ => None,
            },
            Node::Mul(factors, c) => match factors.get(i) {
                Some((base, exp)) => Some(raise(power(base, exp))),
                None if i == factors.len() && !c.is_one() => Some(Ex::from(*c)),
                None => None,
            },
            Node::Add(terms, c) => match terms.get(i) {
                Some((rest, k)) => Some(raise(scale(rest, k))),
                None if i == terms.len() && !c.is_zero() => Some(Ex::from(*c)),
                None => None,
            },
        }
    }

    pub fn try_add(&self, rhs: &Ex) -> SymbolicResult<Ex> {
        sum([self.clone(), rhs.clone()])
    }

    pub fn try_sub(&self, rhs: &Ex) -> SymbolicResult<Ex> {
        sum([self.clone(), rhs.try_neg()?])
    }

    pub fn try_mul(&self, rhs: &Ex) -> SymbolicResult<Ex> {
        product([self.clone(), rhs.clone()])
    }

    pub fn try_div(&self, rhs: &Ex) -> SymbolicResult<Ex> {
        if rhs.is_zero() {
            return Err(SymbolicError::DivisionByZero);
        }
        product([self.clone(), power(rhs, &Ex::from(-1))?])
    }

    pub fn try_neg(&self) -> SymbolicResult<Ex> {
        product([Ex::from(Numeric::MINUS_ONE), self.clone()])
    }

    pub fn try_pow(&self, exp: &Ex) -> SymbolicResult<Ex> {
        power(self, exp)
    }

    /// `self^exp`; panics where the exact result is undefined (`0^-1`).
    pub fn pow(&self, exp: impl Into<Ex>) -> Ex {
        raise(power(self, &exp.into()))
    }

    pub fn sin(&self) -> Ex {
        raise(Function::Sin.apply(self))
    }

    pub fn cos(&self) -> Ex {
        raise(Function::Cos.apply(self))
    }

    pub fn exp(&self) -> Ex {
        raise(Function::Exp.apply(self))
    }

    /// Natural logarithm; panics at `log(0)`.
    pub fn log(&self) -> Ex {
        raise(Function::Log.apply(self))
    }
}

impl From<Numeric> for Ex {
    fn from(n: Numeric) -> Self {
        Ex::from_node(Node::Num(n))
    }
}

impl From<i64> for Ex {
    fn from(n: i64) -> Self {
        Ex::from(Numeric::integer(n))
    }
}

impl From<i32> for Ex {
    fn from(n: i32) -> Self {
        Ex::from(n as i64)
    }
}

impl From<Symbol> for Ex {
    fn from(s: Symbol) -> Self {
        Ex::from_node(Node::Sym(s))
    }
}

impl From<&Symbol> for Ex {
    fn from(s: &Symbol) -> Self {
        Ex::from(s.clone())
    }
}

impl From<&Ex> for Ex {
    fn from(e: &Ex) -> Self {
        e.clone()
    }
}

impl fmt::Debug for Ex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ex({})", self)
    }
}

// Split `c·rest` into its numeric coefficient and the remaining expression.
fn split_coefficient(e: &Ex) -> (Numeric, Ex) {
    match e.node() {
        Node::Mul(factors, c) if !c.is_one() => (*c, rebuild_factors(factors)),
        _ => (Numeric::ONE, e.clone()),
    }
}

fn rebuild_factors(factors: &[(Ex, Ex)]) -> Ex {
    match factors {
        [(base, exp)] if exp.is_one() => base.clone(),
        [(base, exp)] => Ex::from_node(Node::Pow(base.clone(), exp.clone())),
        _ => Ex::from_node(Node::Mul(factors.to_vec(), Numeric::ONE)),
    }
}

fn scale(rest: &Ex, k: &Numeric) -> SymbolicResult<Ex> {
    if k.is_one() {
        Ok(rest.clone())
    } else {
        product([Ex::from(*k), rest.clone()])
    }
}

/// Canonical sum of `items`.
pub(crate) fn sum<I: IntoIterator<Item = Ex>>(items: I) -> SymbolicResult<Ex> {
    let mut constant = Numeric::ZERO;
    let mut terms: BTreeMap<Ex, Numeric> = BTreeMap::new();

    let mut accumulate = |rest: Ex, k: &Numeric| -> SymbolicResult<()> {
        let slot = terms.entry(rest).or_insert(Numeric::ZERO);
        *slot = slot.checked_add(k)?;
        Ok(())
    };

    for item in items {
        match item.node() {
            Node::Num(n) => constant = constant.checked_add(n)?,
            Node::Add(inner, c) => {
                constant = constant.checked_add(c)?;
                for (rest, k) in inner {
                    accumulate(rest.clone(), k)?;
                }
            }
            _ => {
                let (k, rest) = split_coefficient(&item);
                accumulate(rest, &k)?;
            }
        }
    }

    let terms: Vec<(Ex, Numeric)> = terms.into_iter().filter(|(_, k)| !k.is_zero()).collect();
    if terms.is_empty() {
        return Ok(Ex::from(constant));
    }
    if terms.len() == 1 && constant.is_zero() {
        let (rest, k) = &terms[0];
        return scale(rest, k);
    }
    Ok(Ex::from_node(Node::Add(terms, constant)))
}

/// Canonical product of `items`.
pub(crate) fn product<I: IntoIterator<Item = Ex>>(items: I) -> SymbolicResult<Ex> {
    let mut coeff = Numeric::ONE;
    let mut factors: BTreeMap<Ex, Ex> = BTreeMap::new();

    let mut combine = |base: Ex, exp: Ex| -> SymbolicResult<()> {
        match factors.get_mut(&base) {
            Some(existing) => *existing = sum([existing.clone(), exp])?,
            None => {
                factors.insert(base, exp);
            }
        }
        Ok(())
    };

    for item in items {
        match item.node() {
            Node::Num(n) => coeff = coeff.checked_mul(n)?,
            Node::Mul(inner, c) => {
                coeff = coeff.checked_mul(c)?;
                for (base, exp) in inner {
                    combine(base.clone(), exp.clone())?;
                }
            }
            Node::Pow(base, exp) => combine(base.clone(), exp.clone())?,
            _ => combine(item.clone(), Ex::one())?,
        }
    }

    if coeff.is_zero() {
        return Ok(Ex::zero());
    }

    let mut kept: Vec<(Ex, Ex)> = Vec::with_capacity(factors.len());
    for (base, exp) in factors {
        let p = power(&base, &exp)?;
        match p.node() {
            Node::Num(n) => coeff = coeff.checked_mul(n)?,
            Node::Pow(b, e) => kept.push((b.clone(), e.clone())),
            Node::Mul(inner, c) => {
                coeff = coeff.checked_mul(c)?;
                kept.extend(inner.iter().cloned());
            }
            _ => kept.push((p.clone(), Ex::one())),
        }
    }
    kept.sort();

    if coeff.is_zero() {
        return Ok(Ex::zero());
    }
    if kept.is_empty() {
        return Ok(Ex::from(coeff));
    }
    if let [(base, exp)] = kept.as_slice() {
        if exp.is_one() {
            if coeff.is_one() {
                return Ok(base.clone());
            }
            if let Node::Add(terms, c) = base.node() {
                let scaled = terms
                    .iter()
                    .map(|(rest, k)| Ok((rest.clone(), k.checked_mul(&coeff)?)))
                    .collect::<SymbolicResult<Vec<_>>>()?;
                return Ok(Ex::from_node(Node::Add(scaled, c.checked_mul(&coeff)?)));
            }
        } else if coeff.is_one() {
            return Ok(Ex::from_node(Node::Pow(base.clone(), exp.clone())));
        }
    }
    Ok(Ex::from_node(Node::Mul(kept, coeff)))
}

/// Canonical `base^exp`.
pub(crate) fn power(base: &Ex, exp: &Ex) -> SymbolicResult<Ex> {
    if let Node::Num(e) = exp.node() {
        if e.is_zero() {
            return Ok(Ex::one());
        }
        if e.is_one() {
            return Ok(base.clone());
        }
        if let Some(n) = e.to_i32() {
            match base.node() {
                Node::Num(b) => return Ok(Ex::from(b.checked_pow(n)?)),
                Node::Pow(inner_base, inner_exp) => {
                    return power(inner_base, &product([inner_exp.clone(), exp.clone()])?);
                }
                Node::Mul(factors, c) => {
                    let mut items = vec![Ex::from(c.checked_pow(n)?)];
                    for (b, fe) in factors {
                        items.push(power(b, &product([fe.clone(), exp.clone()])?)?);
                    }
                    return product(items);
                }
                _ => {}
            }
        }
    }
    if base.is_one() {
        return Ok(Ex::one());
    }
    Ok(Ex::from_node(Node::Pow(base.clone(), exp.clone())))
}
