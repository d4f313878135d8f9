//! Binding to the grammar compilation engine.

use gramjs::{BuildError, BuildOptions, BuildResult};

/// The compilation engine as seen by the driver: opaque text in, opaque text
/// out. Implemented by the production generator here and by scripted doubles
/// in the driver tests.
pub(crate) trait BuildEngine {
    fn build(&self, source: &str, options: &BuildOptions) -> Result<BuildResult, BuildError>;
}

/// Production engine backed by `gramjs`.
pub(crate) struct Generator;

impl BuildEngine for Generator {
    fn build(&self, source: &str, options: &BuildOptions) -> Result<BuildResult, BuildError> {
        gramjs::build_parser_file(source, options)
    }
}
