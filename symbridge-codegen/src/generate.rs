//! Rust glue generation.
//!
//! Renders a `symbridge_ffi::bindings!` block for an interface. Handle types
//! map to the `Native<Class>` newtypes of the binding crate: `&NativeEx` as a
//! parameter, `Box<NativeEx>` as a result.

use gtmpl::{Context, Template, Value};
use gtmpl_value::FuncError;
use serde::Serialize;
use symbridge_shared::{BridgeError, BridgeResult};

use crate::interface::{Interface, MethodDecl, MethodKind, TypeRef};

const BINDING_TEMPLATE: &str = r#"{{if .doc}}    /// {{.doc}}
{{end}}    {{.role}} fn {{.symbol}}({{join .params ", "}}) -> {{.ret}} {
        {{.body}}
    }
"#;

const OPERATORS: &[&str] = &["+", "-", "*", "/", "=="];

#[derive(Debug, Serialize)]
struct BindingView {
    doc: String,
    role: &'static str,
    symbol: String,
    params: Vec<String>,
    ret: String,
    body: String,
}

/// Newtype wrapping a native class in the binding crate.
pub fn wrapper(class: &str) -> String {
    format!("Native{}", class)
}

fn param_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::String => "&str".to_string(),
        TypeRef::Integer(width) => width.to_string(),
        TypeRef::Unit => "()".to_string(),
        TypeRef::Class(class) => format!("&{}", wrapper(class)),
    }
}

fn return_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::String => "String".to_string(),
        TypeRef::Integer(width) => width.to_string(),
        TypeRef::Unit => "()".to_string(),
        TypeRef::Class(class) => format!("Box<{}>", wrapper(class)),
    }
}

fn join(args: &[Value]) -> Result<Value, FuncError> {
    let (items, sep) = match args {
        [Value::Array(items), Value::String(sep)] => (items, sep),
        [Value::Array(_), _] => return Err(FuncError::Generic("join separator must be a string".into())),
        _ => return Err(FuncError::ExactlyXArgs("join".into(), 2)),
    };
    let parts = items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(FuncError::Generic("join expects a list of strings".into())),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::from(parts.join(sep.as_str())))
}

/// Convert a `serde_json::Value` to `gtmpl::Value` recursively.
fn value_from_serde_json(v: &serde_json::Value) -> Value {
    use serde_json::Value as JsonValue;
    match v {
        JsonValue::Object(m) => {
            let map: std::collections::HashMap<String, Value> = m
                .iter()
                .map(|(k, v)| (k.clone(), value_from_serde_json(v)))
                .collect();
            Value::from(map)
        }
        JsonValue::Array(arr) => Value::from(arr.iter().map(value_from_serde_json).collect::<Vec<_>>()),
        JsonValue::Number(n) => Value::from(n.as_i64().unwrap_or_default()),
        JsonValue::Bool(b) => Value::from(*b),
        JsonValue::String(s) => Value::from(s.as_str()),
        JsonValue::Null => Value::from(""),
    }
}

/// Parsed binding template (parse once, render per member).
pub struct Renderer {
    tmpl: Template,
}

impl Renderer {
    pub fn new() -> BridgeResult<Self> {
        let mut tmpl = Template::default();
        tmpl.add_func("join", join);
        tmpl.parse(BINDING_TEMPLATE)
            .map_err(|e| BridgeError::Codegen(format!("template parse error: {}", e)))?;
        Ok(Self { tmpl })
    }

    fn render(&self, view: &BindingView) -> BridgeResult<String> {
        let json = serde_json::to_value(view)?;
        let ctx = Context::from(value_from_serde_json(&json));
        self.tmpl
            .render(&ctx)
            .map_err(|e| BridgeError::Codegen(format!("template error: {}", e)))
    }

    /// The complete glue for `interface`: `use` lines and one `bindings!` block.
    pub fn generate(&self, interface: &Interface) -> BridgeResult<String> {
        let mut out = String::new();
        for path in &interface.uses {
            out.push_str(&format!("use {};\n", path));
        }
        if !interface.uses.is_empty() {
            out.push('\n');
        }
        out.push_str("symbridge_ffi::bindings! {\n");
        for method in &interface.methods {
            let view = view(interface, method)?;
            tracing::debug!(symbol = %view.symbol, "rendering binding");
            out.push_str(&self.render(&view)?);
        }
        out.push_str("}\n");
        Ok(out)
    }
}

fn view(interface: &Interface, method: &MethodDecl) -> BridgeResult<BindingView> {
    let mut params = Vec::with_capacity(method.params.len() + 1);
    if method.kind == MethodKind::Method
        && let Some(class) = interface.class_name()
    {
        params.push(format!("this: &{}", wrapper(class)));
    }
    let mut args = Vec::with_capacity(method.params.len());
    for param in &method.params {
        let ty = interface.resolve(&param.ty)?;
        params.push(format!("{}: {}", param.name, param_type(&ty)));
        args.push(match ty {
            TypeRef::Class(_) => format!("&{}.0", param.name),
            _ => param.name.clone(),
        });
    }
    let returns = interface.resolve(&method.returns)?;
    let body = wrap_result(&returns, method.convert, &call(method, &args));
    Ok(BindingView {
        doc: method.doc.clone().unwrap_or_default(),
        role: method.kind.keyword(),
        symbol: interface.symbol(method),
        params,
        ret: return_type(&returns),
        body,
    })
}

fn call(method: &MethodDecl, args: &[String]) -> String {
    let native = method.native.as_str();
    match method.kind {
        MethodKind::Method if OPERATORS.contains(&native) => match args {
            [rhs] => format!("&this.0 {} {}", native, rhs),
            _ => format!("{}(&this.0)", native),
        },
        MethodKind::Method => format!("this.0.{}({})", native, args.join(", ")),
        MethodKind::Constructor | MethodKind::Function => format!("{}({})", native, args.join(", ")),
    }
}

fn wrap_result(returns: &TypeRef, convert: bool, call: &str) -> String {
    match returns {
        TypeRef::Class(class) => format!("Box::new({}({}))", wrapper(class), call),
        TypeRef::String if convert => format!("String::from({})", call),
        TypeRef::Integer(width) if convert => format!("({}) as {}", call, width),
        TypeRef::Unit => format!("{};", call),
        TypeRef::String | TypeRef::Integer(_) => call.to_string(),
    }
}
