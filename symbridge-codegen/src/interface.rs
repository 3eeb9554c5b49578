//! Class interface files.
//!
//! An interface file declares one wrapped class (or a set of free functions)
//! and the members to export:
//!
//! ```yaml
//! namespace: Symbolic
//! class:
//!   name: Ex
//! deps: [Symbol]
//! uses: [symbolic::Ex, crate::classes::NativeEx]
//! methods:
//!   - kind: method
//!     name: diff
//!     native: diff
//!     params:
//!       - { name: s, type: Symbol }
//!     returns: Ex
//! ```
//!
//! A method whose native result differs from `returns` (a `bool` exported
//! as `u8`, a `&str` exported as `string`) sets `convert: true`.
//!
//! Types are `string`, an integer width (`i8` .. `u64`, `isize`, `usize`),
//! `unit` (return only), or a class name: the interface's own class or one
//! listed in `deps`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use symbridge_shared::{BridgeError, BridgeResult};

const INT_WIDTHS: &[&str] = &[
    "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "isize", "usize",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub namespace: String,
    #[serde(default)]
    pub class: Option<ClassDecl>,
    /// Other classes this interface mentions.
    #[serde(default)]
    pub deps: Vec<String>,
    /// `use` paths emitted at the top of generated glue.
    #[serde(default)]
    pub uses: Vec<String>,
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Function,
}

impl MethodKind {
    pub fn keyword(self) -> &'static str {
        match self {
            MethodKind::Constructor => "constructor",
            MethodKind::Method => "method",
            MethodKind::Function => "function",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub kind: MethodKind,
    pub name: String,
    /// Native function, method name, or operator (`+ - * / ==`).
    pub native: String,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    pub returns: String,
    /// The native result is not already of type `returns` and is converted
    /// (`bool` or another width with `as`, `&str` with `String::from`).
    #[serde(default)]
    pub convert: bool,
    #[serde(default)]
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A resolved interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    String,
    Integer(&'static str),
    Unit,
    /// Unqualified class name.
    Class(String),
}

/// One binding's signature in the flat form of a descriptor table dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorRecord {
    pub symbol: String,
    pub receiver: String,
    pub params: Vec<String>,
    pub returns: String,
}

impl Interface {
    pub fn from_yaml(text: &str) -> BridgeResult<Self> {
        let interface: Interface = serde_yaml::from_str(text)?;
        interface.validate()?;
        Ok(interface)
    }

    pub fn load(path: &Path) -> BridgeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::Interface(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&text)
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class.as_ref().map(|c| c.name.as_str())
    }

    /// `Namespace.Class`, as classes are registered with the host.
    pub fn qualified(&self, class: &str) -> String {
        format!("{}.{}", self.namespace, class)
    }

    pub fn symbol(&self, method: &MethodDecl) -> String {
        match (method.kind, self.class_name()) {
            (MethodKind::Function, _) | (_, None) => format!("{}_{}", self.namespace, method.name),
            (_, Some(class)) => format!("{}_{}_{}", self.namespace, class, method.name),
        }
    }

    pub fn resolve(&self, ty: &str) -> BridgeResult<TypeRef> {
        match ty {
            "string" => Ok(TypeRef::String),
            "unit" => Ok(TypeRef::Unit),
            _ => {
                if let Some(width) = INT_WIDTHS.iter().find(|w| **w == ty) {
                    Ok(TypeRef::Integer(*width))
                } else if self.class_name() == Some(ty) || self.deps.iter().any(|d| d == ty) {
                    Ok(TypeRef::Class(ty.to_string()))
                } else {
                    Err(BridgeError::Interface(format!("unknown type '{}'", ty)))
                }
            }
        }
    }

    fn validate(&self) -> BridgeResult<()> {
        for method in &self.methods {
            for param in &method.params {
                if self.resolve(&param.ty)? == TypeRef::Unit {
                    return Err(BridgeError::Interface(format!(
                        "{}: parameter '{}' cannot be unit",
                        method.name, param.name
                    )));
                }
            }
            let returns = self.resolve(&method.returns)?;
            if method.convert && matches!(returns, TypeRef::Class(_) | TypeRef::Unit) {
                return Err(BridgeError::Interface(format!(
                    "{}: only string and integer results can be converted",
                    method.name
                )));
            }
            match (method.kind, self.class_name()) {
                (MethodKind::Constructor | MethodKind::Method, None) => {
                    return Err(BridgeError::Interface(format!(
                        "{}: {} declared without a class",
                        method.name,
                        method.kind.keyword()
                    )));
                }
                (MethodKind::Constructor, Some(class)) if returns != TypeRef::Class(class.to_string()) => {
                    return Err(BridgeError::Interface(format!(
                        "{}: constructor must return {}",
                        method.name, class
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn kind_string(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::String => "string".to_string(),
            TypeRef::Integer(width) => width.to_string(),
            TypeRef::Unit => "unit".to_string(),
            TypeRef::Class(class) => format!("handle:{}", self.qualified(class)),
        }
    }

    /// Declared signatures, in the same form as a compiled descriptor table.
    pub fn descriptors(&self) -> BridgeResult<Vec<DescriptorRecord>> {
        self.methods
            .iter()
            .map(|method| {
                let mut params = Vec::with_capacity(method.params.len() + 1);
                let receiver = match (method.kind, self.class_name()) {
                    (MethodKind::Function, _) | (_, None) => "function".to_string(),
                    (MethodKind::Constructor, Some(class)) => {
                        format!("constructor:{}", self.qualified(class))
                    }
                    (MethodKind::Method, Some(class)) => {
                        params.push(format!("handle:{}", self.qualified(class)));
                        format!("method:{}", self.qualified(class))
                    }
                };
                for param in &method.params {
                    params.push(self.kind_string(&self.resolve(&param.ty)?));
                }
                Ok(DescriptorRecord {
                    symbol: self.symbol(method),
                    receiver,
                    params,
                    returns: self.kind_string(&self.resolve(&method.returns)?),
                })
            })
            .collect()
    }
}
