use std::path::PathBuf;

use rstest::rstest;
use symbridge_codegen::{DescriptorRecord, Interface, Mismatch, Renderer, compare, parse_table};
use symbridge_ffi::ValueKind;
use symbridge_ffi::descriptor::find;

fn interface(name: &str) -> Interface {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("interface").join(name);
    Interface::load(&path).unwrap()
}

fn compiled() -> Vec<DescriptorRecord> {
    let json = symbridge_ffi::json::descriptor_table_json(&symbridge::descriptor_table()).unwrap();
    parse_table(&json).unwrap()
}

#[rstest]
#[case("symbol.yml")]
#[case("ex.yml")]
#[case("functions.yml")]
fn test_compiled_table_matches_interface(#[case] file: &str) {
    let declared = interface(file).descriptors().unwrap();
    let mismatches = compare(&declared, &compiled());
    assert!(
        mismatches.is_empty(),
        "{}",
        mismatches.iter().map(|m| m.to_string()).collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn test_every_export_is_declared() {
    let declared: Vec<String> = ["symbol.yml", "ex.yml", "functions.yml"]
        .iter()
        .flat_map(|f| interface(f).descriptors().unwrap())
        .map(|d| d.symbol)
        .collect();
    for record in compiled() {
        assert!(declared.contains(&record.symbol), "{} is not declared", record.symbol);
    }
}

#[test]
fn test_swapped_arguments_are_caught() {
    let declared = interface("ex.yml").descriptors().unwrap();
    let mut table = compiled();
    let subs = table
        .iter_mut()
        .find(|d| d.symbol == "Symbolic_Ex_subs")
        .unwrap();
    subs.params.swap(1, 2);

    let mismatches = compare(&declared, &table);
    assert_eq!(
        mismatches,
        vec![Mismatch::Params {
            symbol: "Symbolic_Ex_subs".into(),
            declared: vec![
                "handle:Symbolic.Ex".into(),
                "handle:Symbolic.Symbol".into(),
                "handle:Symbolic.Ex".into(),
            ],
            compiled: vec![
                "handle:Symbolic.Ex".into(),
                "handle:Symbolic.Ex".into(),
                "handle:Symbolic.Symbol".into(),
            ],
        }]
    );
}

fn checked_in_glue(file: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src").join(file);
    let text = std::fs::read_to_string(path).unwrap();
    let (header, body) = text.split_once("\n\n").unwrap();
    assert!(header.starts_with("//! Generated by `symbridge-codegen generate"), "{}", header);
    body.to_string()
}

fn rendered_glue(file: &str) -> String {
    Renderer::new().unwrap().generate(&interface(file)).unwrap()
}

#[rstest]
#[case("symbol.yml", "symbol.rs")]
#[case("ex.yml", "ex.rs")]
#[case("functions.yml", "functions.rs")]
fn test_glue_matches_interface(#[case] declared: &str, #[case] glue: &str) {
    assert_eq!(
        checked_in_glue(glue),
        rendered_glue(declared),
        "src/{} differs from `symbridge-codegen generate interface/{}`",
        glue,
        declared
    );
}

#[test]
fn test_two_string_constructor_swap_is_caught() {
    let table = symbridge::descriptor_table();
    let compiled = find(&table, "Symbolic_Symbol_mkWithTex").unwrap();
    assert_eq!(compiled.params, &[ValueKind::String, ValueKind::String]);

    let rendered = rendered_glue("symbol.yml");
    assert!(rendered.contains("Symbol::with_tex_name(name, tex)"));
    let swapped = checked_in_glue("symbol.rs").replace("with_tex_name(name, tex)", "with_tex_name(tex, name)");
    assert_ne!(swapped, rendered);
}

#[test]
fn test_header_declares_bindings_and_primitives() {
    let header = std::fs::read_to_string(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("include").join("symbridge.h"),
    )
    .unwrap();
    assert!(header.contains("ObjRes Symbolic_Ex_subs(ObjArg self_, ObjArg s, ObjArg e);"));
    assert!(header.contains("ObjRes Symbolic_printSample(void);"));
    assert!(header.contains("symbridge_host_mk_string"));
    assert!(header.contains("symbridge_descriptor_table_json"));
}
