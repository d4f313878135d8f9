//! End-to-end orchestration for one invocation.
//!
//! [`run`] performs the whole linear flow: parse arguments, read the grammar
//! source, call the engine, write or print the artifacts. It never touches
//! the process itself; it returns an [`Exit`] that `main` applies, and reads
//! and writes files through the [`Host`] trait so tests can run it against an
//! in-memory file system and scripted engines.

use anyhow::Context;
use gramjs::{BuildError, BuildOptions};

use crate::args::{self, Parsed, USAGE};
use crate::engine::BuildEngine;
use crate::output::output_files;

/// What the process should do on the way out: a status code plus the text
/// for each standard stream.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Exit {
    pub(crate) status: i32,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Exit {
    fn ok(stdout: String) -> Self {
        Exit {
            status: 0,
            stdout,
            stderr: String::new(),
        }
    }

    fn fail(stderr: String) -> Self {
        Exit {
            status: 1,
            stdout: String::new(),
            stderr,
        }
    }

    /// Configuration errors print the message to stderr and the usage string
    /// to stdout, uniformly.
    fn usage_error(msg: &str) -> Self {
        Exit {
            status: 1,
            stdout: format!("{USAGE}\n"),
            stderr: format!("{msg}\n"),
        }
    }
}

/// File-system access used by the driver.
pub(crate) trait Host {
    fn read_to_string(&mut self, path: &str) -> std::io::Result<String>;
    fn write(&mut self, path: &str, contents: &str) -> std::io::Result<()>;
}

/// The real file system.
pub(crate) struct SystemHost;

impl Host for SystemHost {
    fn read_to_string(&mut self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&mut self, path: &str, contents: &str) -> std::io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// Runs one invocation over the given arguments (program name stripped).
pub(crate) fn run(args: &[String], host: &mut dyn Host, engine: &dyn BuildEngine) -> Exit {
    let config = match args::parse_args(args) {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Help) => return Exit::ok(format!("{USAGE}\n")),
        Err(msg) => return Exit::usage_error(&msg),
    };

    let source = match host
        .read_to_string(&config.file)
        .with_context(|| format!("Could not read {}", config.file))
    {
        Ok(source) => source,
        Err(err) => return Exit::fail(format!("{err:?}\n")),
    };

    let options = BuildOptions {
        file_name: Some(config.file.clone()),
        module_style: config.module_style,
        include_names: config.include_names,
        export_name: config.export_name.clone(),
    };
    let result = match engine.build(&source, &options) {
        Ok(result) => result,
        // Grammar mistakes are the user's; print the message and nothing else.
        Err(BuildError::Grammar(err)) => return Exit::fail(format!("{err}\n")),
        Err(BuildError::Internal(err)) => return Exit::fail(format!("{err:?}\n")),
    };

    let Some(out) = &config.output else {
        return Exit::ok(format!("{}\n", result.parser));
    };

    let (parser_file, terms_file) = output_files(out);
    if let Err(err) = host
        .write(&parser_file, &result.parser)
        .with_context(|| format!("Could not write {parser_file}"))
    {
        return Exit::fail(format!("{err:?}\n"));
    }
    if !config.no_terms {
        if let Err(err) = host
            .write(&terms_file, &result.terms)
            .with_context(|| format!("Could not write {terms_file}"))
        {
            return Exit::fail(format!("{err:?}\n"));
        }
    }
    let and_terms = if config.no_terms {
        String::new()
    } else {
        format!(" and {terms_file}")
    };
    Exit::ok(format!("Wrote {parser_file}{and_terms}\n"))
}
