#![warn(clippy::pedantic)]

//! Grammar-to-JavaScript parser generator.
//!
//! The entry point is [`build_parser_file`]: it takes grammar source text and
//! a [`BuildOptions`] bundle and produces the text of two modules, the parser
//! module and the companion terms module. Problems in the grammar itself come
//! back as [`BuildError::Grammar`] and carry a human-readable message only;
//! every other failure is [`BuildError::Internal`] with full diagnostic
//! detail.

mod emit;
mod grammar;

use grammar::Grammar;

pub use grammar::GenError;

/// Output module format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleStyle {
    #[default]
    Es,
    CommonJs,
}

/// Configuration bundle for a single [`build_parser_file`] call.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Input file name, used in diagnostics only.
    pub file_name: Option<String>,
    pub module_style: ModuleStyle,
    /// Include node names in the generated parser module.
    pub include_names: bool,
    /// Name of the exported parser binding. Defaults to `parser`.
    pub export_name: Option<String>,
}

/// Generated module text for one grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub parser: String,
    pub terms: String,
}

/// Failure modes of [`build_parser_file`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A problem in the grammar source; the message is the whole story.
    #[error(transparent)]
    Grammar(#[from] GenError),
    /// Anything else is an internal fault.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Compiles grammar source text into a parser module and a terms module.
///
/// # Errors
///
/// Returns [`BuildError::Grammar`] for malformed or semantically invalid
/// grammar input, and [`BuildError::Internal`] for any other failure.
pub fn build_parser_file(source: &str, options: &BuildOptions) -> Result<BuildResult, BuildError> {
    let grammar = Grammar::parse(source, options.file_name.as_deref())?;
    Ok(BuildResult {
        parser: emit::parser_module(&grammar, options),
        terms: emit::terms_module(&grammar, options),
    })
}
