//! # Regimen CLI
//!
//! The binary is intentionally thin: the menu lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination. Everything below the CLI is
//! the `regimen` library (see its crate docs for the layering).
//!
//! Running `regimen` in a directory opens the menu against `Workout.json` in that
//! directory, creating the file on the first added exercise.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
