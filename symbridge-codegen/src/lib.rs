//! Interface-driven tooling for symbridge bindings.
//!
//! Reads per-class interface files, renders `bindings!` glue and C
//! prototypes from them, and checks compiled descriptor tables against what
//! the interface declares.

pub mod check;
pub mod generate;
pub mod header;
pub mod interface;

pub use check::{Mismatch, compare, parse_table};
pub use generate::Renderer;
pub use interface::{DescriptorRecord, Interface, MethodKind};
