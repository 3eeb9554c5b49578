//! Substitution and differentiation.

use crate::errors::SymbolicResult;
use crate::ex::{Ex, Node, power, product, raise, sum};
use crate::function::Function;
use crate::symbol::Symbol;

impl Ex {
    /// Whether `s` occurs anywhere in the expression.
    pub fn has(&self, s: &Symbol) -> bool {
        match self.node() {
            Node::Num(_) => false,
            Node::Sym(t) => t == s,
            Node::Func(_, arg) => arg.has(s),
            Node::Pow(base, exp) => base.has(s) || exp.has(s),
            Node::Mul(factors, _) => factors.iter().any(|(b, e)| b.has(s) || e.has(s)),
            Node::Add(terms, _) => terms.iter().any(|(rest, _)| rest.has(s)),
        }
    }

    /// Replace every occurrence of `s` with `with` and re-canonicalise.
    pub fn subs(&self, s: &Symbol, with: &Ex) -> Ex {
        raise(self.try_subs(s, with))
    }

    pub fn try_subs(&self, s: &Symbol, with: &Ex) -> SymbolicResult<Ex> {
        if !self.has(s) {
            return Ok(self.clone());
        }
        match self.node() {
            Node::Num(_) => Ok(self.clone()),
            Node::Sym(_) => Ok(with.clone()),
            Node::Func(func, arg) => func.apply(&arg.try_subs(s, with)?),
            Node::Pow(base, exp) => power(&base.try_subs(s, with)?, &exp.try_subs(s, with)?),
            Node::Mul(factors, coeff) => {
                let mut items = vec![Ex::from(*coeff)];
                for (base, exp) in factors {
                    items.push(power(&base.try_subs(s, with)?, &exp.try_subs(s, with)?)?);
                }
                product(items)
            }
            Node::Add(terms, constant) => {
                let mut items = vec![Ex::from(*constant)];
                for (rest, k) in terms {
                    items.push(product([Ex::from(*k), rest.try_subs(s, with)?])?);
                }
                sum(items)
            }
        }
    }

    /// Partial derivative with respect to `s`.
    pub fn diff(&self, s: &Symbol) -> Ex {
        raise(self.try_diff(s))
    }

    pub fn try_diff(&self, s: &Symbol) -> SymbolicResult<Ex> {
        if !self.has(s) {
            return Ok(Ex::zero());
        }
        match self.node() {
            Node::Num(_) => Ok(Ex::zero()),
            Node::Sym(_) => Ok(Ex::one()),
            Node::Func(func, arg) => product([func.derivative(arg)?, arg.try_diff(s)?]),
            Node::Pow(base, exp) => diff_power(base, exp, s),
            Node::Add(terms, _) => {
                let mut items = Vec::with_capacity(terms.len());
                for (rest, k) in terms {
                    items.push(product([Ex::from(*k), rest.try_diff(s)?])?);
                }
                sum(items)
            }
            Node::Mul(factors, coeff) => {
                // Product rule over the factors `base^exp`.
                let expanded: Vec<Ex> = factors
                    .iter()
                    .map(|(b, e)| power(b, e))
                    .collect::<SymbolicResult<_>>()?;
                let mut items = Vec::with_capacity(expanded.len());
                for (i, factor) in expanded.iter().enumerate() {
                    if !factor.has(s) {
                        continue;
                    }
                    let mut term = vec![Ex::from(*coeff), factor.try_diff(s)?];
                    term.extend(
                        expanded
                            .iter()
                            .enumerate()
                            .filter(|(j, _)| *j != i)
                            .map(|(_, other)| other.clone()),
                    );
                    items.push(product(term)?);
                }
                sum(items)
            }
        }
    }
}

fn diff_power(base: &Ex, exp: &Ex, s: &Symbol) -> SymbolicResult<Ex> {
    if !exp.has(s) {
        // d(b^n) = n * b^(n-1) * b'
        let lowered = power(base, &sum([exp.clone(), Ex::from(-1)])?)?;
        return product([exp.clone(), lowered, base.try_diff(s)?]);
    }
    // d(b^e) = b^e * (e' * log(b) + e * b' / b)
    let whole = power(base, exp)?;
    let log_term = product([exp.try_diff(s)?, Function::Log.apply(base)?])?;
    let ratio_term = product([exp.clone(), base.try_diff(s)?, power(base, &Ex::from(-1))?])?;
    product([whole, sum([log_term, ratio_term])?])
}
