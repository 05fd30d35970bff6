//! # jsoncheck
//!
//! `jsoncheck` is a strict JSON syntax checker. It answers one question
//! about a byte buffer, "is this a well-formed JSON document?", and when
//! the answer is no it reports the first error with its line number.
//!
//! It does not build a value tree. The input goes through two stages:
//!
//! * **Tokenizer:** a byte-based lexer with a lookup table (LUT) for byte
//!   classes and `memchr` for string scanning.
//! * **Parser:** a recursive-descent recognizer over the complete token
//!   sequence.
//!
//! The accepted language is deliberately narrow:
//!
//! * The document root must be an object or an array.
//! * Strings are raw: no escape sequences, no raw newlines.
//! * Numbers are `digits` or `digits.digits`; no sign, no exponent.
//! * No comments, no trailing commas.
//!
//! ## Quick Start
//!
//! ```
//! use jsoncheck::validate;
//!
//! assert!(validate(br#"{"a": 1, "b": [true, false, null]}"#).is_ok());
//!
//! let err = validate(br#"{"a":}"#).unwrap_err();
//! assert_eq!(err.to_string(), "Error [line 1]. Unexpected token. Got token '}'.");
//!
//! let err = validate(b"{key: 1}").unwrap_err();
//! assert_eq!(err.to_string(), "[line 1] Error Unexpected identifier 'key'.");
//! ```

/// Contains the `LexError`, `ParseError` and `ValidationError` types.
pub mod error;
/// Contains the `Limits` applied to untrusted input.
pub mod limits;
/// Contains the recursive-descent `Parser`.
pub mod parser;
/// Contains the `Token`, `TokenKind` and `Literal` types.
pub mod token;

/// The byte-based tokenizer (lexer).
mod tokenizer;

pub use error::{LexError, ParseError, ValidationError};
pub use limits::Limits;
pub use parser::Parser;
pub use token::{Literal, Token, TokenKind};
pub use tokenizer::tokenize;

use log::debug;

/// Checks that `input` is a well-formed JSON document.
///
/// Uses [`Limits::default`]. The whole input is tokenized first, then the
/// tokens are parsed; the first error from either stage is returned.
///
/// # Errors
/// * [`ValidationError::Lex`] for an invalid character, an unknown
///   identifier or a malformed string/number.
/// * [`ValidationError::Parse`] for a grammar violation.
///
/// # Examples
/// ```
/// use jsoncheck::{validate, ValidationError};
///
/// assert!(validate(b"[]").is_ok());
/// assert!(matches!(validate(b"[1,]"), Err(ValidationError::Parse(_))));
/// assert!(matches!(validate(b"[\"abc"), Err(ValidationError::Lex(_))));
/// ```
pub fn validate(input: &[u8]) -> Result<(), ValidationError> {
    validate_with_limits(input, Limits::default())
}

/// Same as [`validate`], with caller-chosen limits.
///
/// # Errors
/// Besides the errors of [`validate`]:
/// * A [`LexError`] on line 1 if `input` is larger than
///   `limits.max_input_bytes`. Nothing is tokenized in that case.
/// * A [`ParseError`] on the opening bracket of the first container that
///   nests deeper than `limits.max_depth`.
pub fn validate_with_limits(input: &[u8], limits: Limits) -> Result<(), ValidationError> {
    debug!("validating {} bytes with {:?}", input.len(), limits);

    if input.len() > limits.max_input_bytes {
        return Err(LexError {
            line: 1,
            message: format!(
                "Input exceeds maximum size limit of {} bytes.",
                limits.max_input_bytes
            ),
        }
        .into());
    }

    let tokens = tokenize(input)?;
    Parser::new(&tokens, limits.max_depth).parse()?;
    Ok(())
}
