//! Collection augmenter entry point.
//!
//! # Responsibility
//! - Ensure the backend `db.json` store carries every managed collection.
//! - Keep stdout output stable for operators running the migration.

use conchas_core::{augment_store, managed_collections};
use std::process::ExitCode;

const DB_FILE: &str = "db.json";

fn main() -> ExitCode {
    let outcome = match augment_store(DB_FILE) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for name in &outcome.added {
        println!("✅ Colección '{name}' agregada");
    }

    println!();
    println!("✨ Colecciones agregadas exitosamente a {DB_FILE}");
    println!("📌 Nuevas colecciones:");
    for name in managed_collections() {
        println!("  - {name}");
    }

    ExitCode::SUCCESS
}
