use std::env;
use std::path::PathBuf;

use symbridge_codegen::{Interface, header};

const INTERFACES: &[&str] = &["symbol.yml", "ex.yml", "functions.yml"];

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_file = PathBuf::from(&crate_dir).join("include").join("symbridge.h");

    // Create include directory if it doesn't exist
    std::fs::create_dir_all(output_file.parent().unwrap())
        .expect("Failed to create include directory");

    // Load cbindgen configuration from cbindgen.toml
    let config_path = PathBuf::from(&crate_dir).join("cbindgen.toml");
    let mut config =
        cbindgen::Config::from_file(&config_path).expect("Failed to load cbindgen.toml");

    // bindings! exports are macro-generated; declare them from the interface files
    let mut prototypes = String::from(
        "\n#ifndef SYMBRIDGE_BINDINGS_H\n#define SYMBRIDGE_BINDINGS_H\n\n#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n",
    );
    for name in INTERFACES {
        let path = PathBuf::from(&crate_dir).join("interface").join(name);
        let interface = Interface::load(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e));
        prototypes.push_str(&header::prototypes(&interface).expect("Failed to render prototypes"));
        println!("cargo:rerun-if-changed=interface/{}", name);
    }
    prototypes.push_str("\n#ifdef __cplusplus\n}\n#endif\n\n#endif /* SYMBRIDGE_BINDINGS_H */\n");
    config.trailer = Some(prototypes);

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(&output_file);

    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
