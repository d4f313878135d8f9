#![warn(clippy::pedantic)]

//! # build-parser
//!
//! Command line front end for the gramjs parser generator. Reads a grammar
//! source file, invokes the compilation engine, and writes the generated
//! parser module (and, unless suppressed, the companion terms module) to
//! disk, or prints the parser module to stdout when no output path is given.
//!
//! ```bash
//! build-parser [--cjs] [--names] [--noTerms] [--output outfile] [--export name] file
//! ```
//!
//! ## Exit codes
//! * 0 – success (including `--help`).
//! * 1 – configuration error, read failure, or compilation failure.
//!
//! ## Tests
//! Integration tests spawn the binary and exercise flag validation and the
//! happy path; driver tests run the same flow against an in-memory file
//! system and scripted engines.

mod args;
mod driver;
mod engine;
mod output;

use std::process;

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let exit = driver::run(&argv, &mut driver::SystemHost, &engine::Generator);
    print!("{}", exit.stdout);
    eprint!("{}", exit.stderr);
    process::exit(exit.status);
}
