//! Binary entry point for `cargo-localver`.

use std::process;

fn main() {
    if let Err(e) = cargo_localver::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
