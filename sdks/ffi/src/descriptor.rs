//! Binding descriptors.
//!
//! Every exported binding carries a `const` descriptor: the receiver, the
//! ordered parameter kinds and the return kind. Descriptors are built by
//! [`bindings!`](crate::bindings) from the same declaration as the exported
//! function, and serialize to the flat string form used by interface checks
//! (`"i64"`, `"string"`, `"handle:Symbolic.Ex"`, `"method:Symbolic.Ex"`).

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Isize,
    Usize,
}

impl IntWidth {
    pub const fn name(self) -> &'static str {
        match self {
            IntWidth::I8 => "i8",
            IntWidth::I16 => "i16",
            IntWidth::I32 => "i32",
            IntWidth::I64 => "i64",
            IntWidth::U8 => "u8",
            IntWidth::U16 => "u16",
            IntWidth::U32 => "u32",
            IntWidth::U64 => "u64",
            IntWidth::Isize => "isize",
            IntWidth::Usize => "usize",
        }
    }
}

/// Kind of value crossing the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer(IntWidth),
    String,
    /// Boxed handle of the named class.
    Handle(&'static str),
    /// The host's "action completed" result. Return position only.
    Unit,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer(width) => f.write_str(width.name()),
            ValueKind::String => f.write_str("string"),
            ValueKind::Handle(class) => write!(f, "handle:{}", class),
            ValueKind::Unit => f.write_str("unit"),
        }
    }
}

impl Serialize for ValueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    Constructor(&'static str),
    Method(&'static str),
    Free,
}

impl fmt::Display for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receiver::Constructor(class) => write!(f, "constructor:{}", class),
            Receiver::Method(class) => write!(f, "method:{}", class),
            Receiver::Free => f.write_str("function"),
        }
    }
}

impl Serialize for Receiver {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Build-time contract for one exported function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BindingDescriptor {
    pub symbol: &'static str,
    pub receiver: Receiver,
    /// Parameter kinds in call order, receiver first for methods.
    pub params: &'static [ValueKind],
    pub returns: ValueKind,
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn is_handle_of(kind: &ValueKind, class: &str) -> bool {
    match kind {
        ValueKind::Handle(c) => str_eq(*c, class),
        _ => false,
    }
}

impl BindingDescriptor {
    /// Methods take a handle of their class first, constructors return one,
    /// and `Unit` is never a parameter.
    pub const fn is_well_formed(&self) -> bool {
        let mut i = 0;
        while i < self.params.len() {
            if matches!(self.params[i], ValueKind::Unit) {
                return false;
            }
            i += 1;
        }
        match self.receiver {
            Receiver::Constructor(class) => is_handle_of(&self.returns, class),
            Receiver::Method(class) => !self.params.is_empty() && is_handle_of(&self.params[0], class),
            Receiver::Free => true,
        }
    }
}

/// Look up a descriptor by exported symbol.
pub fn find<'a>(table: &'a [BindingDescriptor], symbol: &str) -> Option<&'a BindingDescriptor> {
    table.iter().find(|d| d.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EX: ValueKind = ValueKind::Handle("Test.Ex");

    const ADD: BindingDescriptor = BindingDescriptor {
        symbol: "Test_Ex_add",
        receiver: Receiver::Method("Test.Ex"),
        params: &[EX, EX],
        returns: EX,
    };

    const _: () = assert!(ADD.is_well_formed());

    #[test]
    fn test_constructor_must_return_own_class() {
        let good = BindingDescriptor {
            symbol: "Test_Ex_of",
            receiver: Receiver::Constructor("Test.Ex"),
            params: &[ValueKind::Integer(IntWidth::I64)],
            returns: EX,
        };
        assert!(good.is_well_formed());
        let bad = BindingDescriptor {
            returns: ValueKind::Handle("Test.Other"),
            ..good
        };
        assert!(!bad.is_well_formed());
    }

    #[test]
    fn test_method_needs_receiver_first() {
        let swapped = BindingDescriptor {
            params: &[ValueKind::String, EX],
            ..ADD
        };
        assert!(!swapped.is_well_formed());
        let bare = BindingDescriptor { params: &[], ..ADD };
        assert!(!bare.is_well_formed());
    }

    #[test]
    fn test_unit_is_return_only() {
        let free = BindingDescriptor {
            symbol: "Test_run",
            receiver: Receiver::Free,
            params: &[],
            returns: ValueKind::Unit,
        };
        assert!(free.is_well_formed());
        let bad = BindingDescriptor {
            params: &[ValueKind::Unit],
            ..free
        };
        assert!(!bad.is_well_formed());
    }

    #[test]
    fn test_serializes_to_flat_strings() {
        let json = serde_json::to_value(ADD).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "symbol": "Test_Ex_add",
                "receiver": "method:Test.Ex",
                "params": ["handle:Test.Ex", "handle:Test.Ex"],
                "returns": "handle:Test.Ex",
            })
        );
        assert_eq!(ValueKind::Integer(IntWidth::Usize).to_string(), "usize");
        assert_eq!(Receiver::Free.to_string(), "function");
    }

    #[test]
    fn test_find_by_symbol() {
        let table = [ADD];
        assert!(find(&table, "Test_Ex_add").is_some());
        assert!(find(&table, "Test_Ex_sub").is_none());
    }
}
