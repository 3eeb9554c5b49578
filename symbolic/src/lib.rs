//! Symbolic algebra: symbols, automatically canonicalised expressions, printing,
//! substitution and differentiation.
//!
//! Expressions are immutable, cheaply clonable handles onto a shared node tree.
//! Every constructor returns the canonical form, so structurally equal
//! expressions compare equal:
//!
//! ```
//! use symbolic::{Ex, Symbol};
//!
//! let x = Symbol::new("x");
//! let y = Symbol::new("y");
//! let e = &x + 2 * &y;
//! assert_eq!(e.to_string(), "x+2*y");
//! assert_eq!(e.diff(&y), Ex::from(2));
//! ```

mod calculus;
pub mod errors;
pub mod ex;
pub mod function;
pub mod numeric;
mod ops;
mod print;
pub mod symbol;

pub use errors::{SymbolicError, SymbolicResult};
pub use ex::Ex;
pub use function::Function;
pub use numeric::Numeric;
pub use symbol::Symbol;
