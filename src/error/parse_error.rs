/// Represents misuse of the scanner's token stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A token was requested after the input ran out.
    #[error("Error on line {line}: No more tokens.")]
    Exhausted {
        /// The source line where the input ended.
        line: usize,
    },
    /// `push_back` was called before any token was read, or twice without a
    /// `next` in between.
    #[error("Cannot push back: {details}.")]
    IllegalPushBack {
        /// Which of the two misuses occurred.
        details: &'static str,
    },
}

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token stream does not follow the grammar.
    #[error("Error on line {line}: {message}; stack = [{stack}]")]
    Syntax {
        /// What the parser expected and did not find.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The assembly stack at the time of the error, bottom first, each
        /// entry in `value(children)` form.
        stack:   String,
    },
    /// A numeric literal ends in a dangling exponent marker or sign.
    #[error("Error on line {line}: Malformed number literal '{literal}'.")]
    Lexical {
        /// The text of the malformed literal.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The scanner was driven past its input or pushed back illegally.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl ParseError {
    /// The source line the error refers to, when one is known.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. }
            | Self::Lexical { line, .. }
            | Self::Scan(ScanError::Exhausted { line }) => Some(*line),
            Self::Scan(ScanError::IllegalPushBack { .. }) => None,
        }
    }
}
