//! ghmp CLI binary
//!
//! This is the minimal entrypoint for the ghmp CLI.
//! All logic is in the library; main.rs only invokes cli::run().

fn main() {
    // cli::run() handles all output including errors
    if let Err(code) = ghmp::cli::run() {
        std::process::exit(code.as_i32());
    }
}
