//! Demo: construye un handle desde la línea de comandos y lo imprime como
//! manifest JSON.
use std::process::ExitCode;

use log::error;
use qc_core::{InMemoryFileRegistry, QcConfig};
use qcflow_rust::cli::{build_manifest, DEFAULT_JOB_ID, EXIT_USAGE, USAGE};

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("{USAGE}");
        return ExitCode::from(EXIT_USAGE);
    }
    let job_id = args.get(2).map(String::as_str).unwrap_or(DEFAULT_JOB_ID);
    let mut registry = InMemoryFileRegistry::new();
    match build_manifest(&mut registry, &args[0], &args[1], job_id, &QcConfig::from_env()).and_then(|m| m.to_json()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}
