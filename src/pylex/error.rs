//! Error types shared by the lexer, parser and context queries.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PylexError>;

#[derive(Error, Debug)]
pub enum PylexError {
    /// The requested line lies outside the parsed document.
    #[error("line {line} is out of bounds for a document of {line_count} lines")]
    OutOfBounds { line: usize, line_count: usize },

    #[error("no parse tree available, call parse() first")]
    NotParsed,

    /// Rendering was asked to describe an empty context path. A correctly built tree always
    /// yields at least the root, so this is a caller bug.
    #[error("cannot create context string for empty context")]
    EmptyContext,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PylexError {
    pub fn out_of_bounds(line: usize, line_count: usize) -> Self {
        PylexError::OutOfBounds { line, line_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = PylexError::out_of_bounds(7, 3);
        assert_eq!(
            err.to_string(),
            "line 7 is out of bounds for a document of 3 lines"
        );
    }

    #[test]
    fn test_empty_context_message() {
        assert_eq!(
            PylexError::EmptyContext.to_string(),
            "cannot create context string for empty context"
        );
    }
}
