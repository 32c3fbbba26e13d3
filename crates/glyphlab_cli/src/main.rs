//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `glyphlab_core` linkage.
//! - Print a deterministic summary of a symbol workspace for quick local
//!   sanity checks.

use glyphlab_core::SymbolService;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!("glyphlab_core version={}", glyphlab_core::core_version());

    let (service, warning) = match SymbolService::open(&root) {
        Ok(opened) => opened,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }

    match service.list_ordered() {
        Ok(ids) => {
            println!("symbols={} tagged={}", ids.len(), service.catalog().len());
            for id in ids {
                let record = service.describe(&id);
                println!("{id} kind={:?} sound={}", record.kind, record.pronunciation);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
