//! # Prodcat CLI
//!
//! The binary only invokes `cli::run()` and turns an error into a message
//! on stderr and exit code 1. Everything else lives in `cli/` (terminal
//! concerns) and the `prodcat` library (catalog logic).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
