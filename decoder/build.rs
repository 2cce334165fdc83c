use std::env;
use std::fs;
use std::path::Path;

use opcode_gen::{tables, RustSyntax};

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("opcode_tables.rs");

    let source = opcode_gen::generate(&tables::builtin(), &RustSyntax)
        .expect("Built-in opcode tables failed to generate");

    fs::write(&dest_path, source).unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
