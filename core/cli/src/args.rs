//! Command line argument parsing for `build-parser`.
//!
//! A hand-rolled single left-to-right pass. Flags that take a value consume
//! exactly the next token, even when that token itself looks like a flag, and
//! a value-taking flag at the end of the list simply leaves its value absent.

use gramjs::ModuleStyle;

pub(crate) const USAGE: &str =
    "Usage: build-parser [--cjs] [--names] [--noTerms] [--output outfile] [--export name] file";

/// Validated configuration for one invocation, immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) file: String,
    pub(crate) output: Option<String>,
    pub(crate) module_style: ModuleStyle,
    pub(crate) include_names: bool,
    pub(crate) export_name: Option<String>,
    pub(crate) no_terms: bool,
}

/// Outcome of argument parsing when no configuration error occurred.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Parsed {
    Run(Config),
    /// `--help` was given; print usage and exit 0 without running.
    Help,
}

/// Parses the invocation arguments (program name already stripped). On a
/// configuration error returns the message to print before the usage string.
pub(crate) fn parse_args(args: &[String]) -> Result<Parsed, String> {
    let mut file: Option<String> = None;
    let mut output: Option<String> = None;
    let mut module_style = ModuleStyle::Es;
    let mut include_names = false;
    let mut export_name: Option<String> = None;
    let mut no_terms = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if !arg.starts_with('-') {
            if file.is_some() {
                return Err("Multiple input files given".to_owned());
            }
            // An empty token is no input file; it neither counts toward the
            // multiple-input check nor satisfies the required-file check.
            if !arg.is_empty() {
                file = Some(arg.clone());
            }
        } else if arg == "--help" {
            return Ok(Parsed::Help);
        } else if arg == "--cjs" {
            module_style = ModuleStyle::CommonJs;
        } else if arg == "-o" || arg == "--output" {
            if output.is_some() {
                return Err("Multiple output files given".to_owned());
            }
            // An empty value is treated as absent: the run falls back to
            // printing the parser to stdout.
            output = iter.next().cloned().filter(|out| !out.is_empty());
        } else if arg == "--names" {
            include_names = true;
        } else if arg == "--export" {
            export_name = iter.next().cloned();
        } else if arg == "--noTerms" {
            no_terms = true;
        } else {
            return Err(format!("Unrecognized option {arg}"));
        }
    }

    let Some(file) = file else {
        return Err("No input file given".to_owned());
    };
    Ok(Parsed::Run(Config {
        file,
        output,
        module_style,
        include_names,
        export_name,
        no_terms,
    }))
}
