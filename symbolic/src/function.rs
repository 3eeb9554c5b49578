//! Built-in elementary functions.

use std::fmt;

use crate::errors::{SymbolicError, SymbolicResult};
use crate::ex::{Ex, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Function {
    Sin,
    Cos,
    Exp,
    Log,
}

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Exp => "exp",
            Function::Log => "log",
        }
    }

    /// Apply the function, folding the exact special values and holding the rest.
    pub fn apply(self, arg: &Ex) -> SymbolicResult<Ex> {
        if let Some(n) = arg.as_numeric() {
            match self {
                Function::Sin if n.is_zero() => return Ok(Ex::zero()),
                Function::Cos | Function::Exp if n.is_zero() => return Ok(Ex::one()),
                Function::Log if n.is_one() => return Ok(Ex::zero()),
                Function::Log if n.is_zero() => {
                    return Err(SymbolicError::Pole("log(0)".to_string()));
                }
                _ => {}
            }
        }
        match (self, arg.node()) {
            (Function::Exp, Node::Func(Function::Log, inner)) => Ok(inner.clone()),
            _ => Ok(Ex::from_node(Node::Func(self, arg.clone()))),
        }
    }

    /// Derivative of `f(u)` with respect to `u`, evaluated at `arg`.
    pub(crate) fn derivative(self, arg: &Ex) -> SymbolicResult<Ex> {
        match self {
            Function::Sin => Function::Cos.apply(arg),
            Function::Cos => Function::Sin.apply(arg)?.try_neg(),
            Function::Exp => Function::Exp.apply(arg),
            Function::Log => arg.try_pow(&Ex::from(-1)),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
