//! Contains the error types returned by the tokenizer and the parser.
use thiserror::Error;

/// A lexical error raised by the tokenizer.
///
/// Covers invalid characters, unknown identifiers and malformed literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error {message}")]
pub struct LexError {
    /// The line number (1-indexed) the tokenizer was on.
    pub line: usize,
    /// A description of what went wrong.
    pub message: String,
}

/// A grammar error raised by the parser.
///
/// Always points at the token that broke the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error [line {line}]. {message} Got token '{lexeme}'.")]
pub struct ParseError {
    /// The line number (1-indexed) of the offending token.
    pub line: usize,
    /// The expectation that failed.
    pub message: String,
    /// The source text of the offending token (empty at end of input).
    pub lexeme: String,
}

/// The error returned by [`crate::validate`].
///
/// Exactly one of the two stages failed; the first error wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ValidationError {
    /// The line number the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            ValidationError::Lex(e) => e.line,
            ValidationError::Parse(e) => e.line,
        }
    }

    /// The bare message, without the line prefix or token suffix.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::Lex(e) => &e.message,
            ValidationError::Parse(e) => &e.message,
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let error = LexError {
            line: 3,
            message: "Unexpected character /.".to_string(),
        };
        assert_eq!(error.to_string(), "[line 3] Error Unexpected character /.");
    }

    #[test]
    fn test_parse_error_display() {
        let error = ParseError {
            line: 10,
            message: "Unexpected token.".to_string(),
            lexeme: "}".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Error [line 10]. Unexpected token. Got token '}'."
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let lex: ValidationError = LexError {
            line: 1,
            message: "Unterminated string".to_string(),
        }
        .into();
        assert_eq!(lex.to_string(), "[line 1] Error Unterminated string");
        assert_eq!(lex.line(), 1);
        assert_eq!(lex.message(), "Unterminated string");

        let parse: ValidationError = ParseError {
            line: 2,
            message: "Missing key-value pair.".to_string(),
            lexeme: String::new(),
        }
        .into();
        assert_eq!(
            parse.to_string(),
            "Error [line 2]. Missing key-value pair. Got token ''."
        );
        assert_eq!(parse.line(), 2);
    }
}
