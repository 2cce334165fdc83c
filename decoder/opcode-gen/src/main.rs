use std::path::Path;
use std::process::ExitCode;

use opcode_gen::{config, tables, GenResult, RustSyntax};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> GenResult<String> {
    let defs = match std::env::args_os().nth(1) {
        Some(path) => config::load_from_file(Path::new(&path))?,
        None => tables::builtin(),
    };

    opcode_gen::generate(&defs, &RustSyntax)
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "generation failed");
            ExitCode::FAILURE
        }
    }
}
