/// Lexing and parsing errors.
///
/// Defines the errors raised while turning source text into an abstract
/// syntax tree: scanner misuse, malformed numeric literals and grammar
/// violations. Syntax errors carry the parser's assembly stack so that a
/// failed parse can be diagnosed from the partial trees it built.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while interpreting a parsed program: unknown
/// variables or procedures, argument count mismatches, out-of-range colors,
/// non-integral repeat counts and unsupported commands.
pub mod runtime_error;
/// Tree mutation errors.
pub mod tree_error;

pub use parse_error::{ParseError, ScanError};
pub use runtime_error::RuntimeError;
pub use tree_error::TreeError;

/// Any error surfaced by the crate's entry points and the command line.
#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    /// The script could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The script failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A script file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// The path that was being read.
        path:   String,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// The worker thread running a session panicked.
    #[error("The interpreter thread panicked: {0}")]
    WorkerPanicked(String),
}
