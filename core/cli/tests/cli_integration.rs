//! Integration tests for the build-parser CLI.
//!
//! These tests spawn the compiled binary and assert on stdout/stderr and exit
//! codes.

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const USAGE_PREFIX: &str = "Usage: build-parser";

const GRAMMAR: &str = "\
// a three-rule grammar
@top Program { Expr }
Expr { Number }
Number { digits }
";

fn build_parser() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("build-parser"))
}

#[test]
fn help_prints_usage_and_exits_zero() {
    build_parser()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(USAGE_PREFIX));
}

#[test]
fn help_does_not_require_an_input_file() {
    // --help before other arguments wins even when the rest is invalid.
    build_parser()
        .arg("--help")
        .arg("-x")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn no_input_file_is_a_usage_error() {
    build_parser()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No input file given"))
        .stdout(predicate::str::contains(USAGE_PREFIX));
}

#[test]
fn multiple_input_files_are_rejected() {
    build_parser()
        .arg("a.txt")
        .arg("b.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Multiple input files given"))
        .stdout(predicate::str::contains(USAGE_PREFIX));
}

#[test]
fn unrecognized_option_is_rejected() {
    build_parser()
        .arg("-x")
        .arg("a.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unrecognized option -x"));
}

#[test]
fn missing_input_file_fails_with_read_diagnostic() {
    build_parser()
        .arg("this-file-does-not-exist.grammar")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Could not read this-file-does-not-exist.grammar",
        ));
}

#[test]
fn compiles_to_stdout_when_no_output_is_given() {
    let temp = assert_fs::TempDir::new().unwrap();
    let grammar = temp.child("lang.grammar");
    grammar.write_str(GRAMMAR).unwrap();

    build_parser()
        .arg(grammar.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("export const parser"));
}

#[test]
fn writes_parser_and_terms_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let grammar = temp.child("lang.grammar");
    grammar.write_str(GRAMMAR).unwrap();

    build_parser()
        .current_dir(temp.path())
        .arg("-o")
        .arg("out.ts")
        .arg("lang.grammar")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote out.ts and out.terms.ts"));

    temp.child("out.ts")
        .assert(predicate::str::contains("top: \"Program\""));
    temp.child("out.terms.ts")
        .assert(predicate::str::contains("Program = 0"));
}

#[test]
fn no_terms_suppresses_the_terms_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let grammar = temp.child("lang.grammar");
    grammar.write_str(GRAMMAR).unwrap();

    build_parser()
        .current_dir(temp.path())
        .arg("--noTerms")
        .arg("-o")
        .arg("out.ts")
        .arg("lang.grammar")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote out.ts\n"));

    temp.child("out.ts").assert(predicate::path::exists());
    temp.child("out.terms.ts")
        .assert(predicate::path::missing());
}

#[test]
fn cjs_and_export_name_flow_through_to_the_artifacts() {
    let temp = assert_fs::TempDir::new().unwrap();
    let grammar = temp.child("lang.grammar");
    grammar.write_str(GRAMMAR).unwrap();

    build_parser()
        .current_dir(temp.path())
        .arg("--cjs")
        .arg("--export")
        .arg("langParser")
        .arg("-o")
        .arg("out")
        .arg("lang.grammar")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote out.js and out.terms.js"));

    temp.child("out.js")
        .assert(predicate::str::contains("exports.langParser = {"));
}

#[test]
fn grammar_errors_print_the_message_only() {
    let temp = assert_fs::TempDir::new().unwrap();
    let grammar = temp.child("broken.grammar");
    grammar.write_str("Expr { Number }\n").unwrap();

    build_parser()
        .arg(grammar.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing '@top' rule"))
        .stderr(predicate::str::contains("Could not").not());
}
