//! C prototypes for generated bindings.
//!
//! cbindgen cannot see through `bindings!`, so binding crates append these
//! declarations to their generated header.

use symbridge_shared::BridgeResult;

use crate::interface::{Interface, MethodKind};

/// One prototype per binding, in declaration order.
pub fn prototypes(interface: &Interface) -> BridgeResult<String> {
    let mut out = String::new();
    for method in &interface.methods {
        let mut params = Vec::with_capacity(method.params.len() + 1);
        if method.kind == MethodKind::Method {
            params.push("ObjArg self_".to_string());
        }
        for param in &method.params {
            interface.resolve(&param.ty)?;
            params.push(format!("ObjArg {}", param.name));
        }
        if params.is_empty() {
            params.push("void".to_string());
        }
        out.push_str(&format!(
            "ObjRes {}({});\n",
            interface.symbol(method),
            params.join(", ")
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prototypes() {
        let interface = Interface::from_yaml(
            r#"
namespace: Symbolic
class: { name: Symbol }
methods:
  - { kind: constructor, name: mk, native: Symbol::new, params: [{ name: name, type: string }], returns: Symbol }
  - { kind: method, name: name, native: name, returns: string }
"#,
        )
        .unwrap();
        assert_eq!(
            prototypes(&interface).unwrap(),
            "ObjRes Symbolic_Symbol_mk(ObjArg name);\nObjRes Symbolic_Symbol_name(ObjArg self_);\n"
        );
    }

    #[test]
    fn test_nullary_function() {
        let interface = Interface::from_yaml(
            "namespace: Symbolic\nmethods:\n  - { kind: function, name: printSample, native: print_sample, returns: unit }\n",
        )
        .unwrap();
        assert_eq!(prototypes(&interface).unwrap(), "ObjRes Symbolic_printSample(void);\n");
    }
}
