//! Defines the `Token`, `TokenKind` and `Literal` types.
//!
//! A `Vec<Token>` is the only thing the `tokenizer` hands to the `parser`.

use std::borrow::Cow;
use std::fmt;

/// The specific kind of a `Token`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// A string, e.g., `"hello"`
    String,
    /// A number, e.g., `123.4`
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// Never produced by the tokenizer; the parser reports it once the
    /// tokens run out.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The decoded value carried by a literal token.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal<'a> {
    /// Punctuation and `null`.
    Absent,
    Boolean(bool),
    Number(f64),
    /// The raw bytes between the quotes. Escapes are not processed.
    Text(Cow<'a, str>),
}

/// A single token produced by the tokenizer.
#[derive(Debug, PartialEq, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The exact source text of the token, quotes included for strings.
    pub lexeme: Cow<'a, str>,
    pub literal: Literal<'a>,
    /// The 1-indexed line number the token sits on.
    pub line: usize,
}

impl<'a> Token<'a> {
    /// The sentinel the parser reads once it has run past the last token.
    pub(crate) fn end_of_input(line: usize) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            lexeme: Cow::Borrowed(""),
            literal: Literal::Absent,
            line,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token<{}, {}>", self.kind, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token {
            kind: TokenKind::String,
            lexeme: Cow::Borrowed("\"key\""),
            literal: Literal::Text(Cow::Borrowed("key")),
            line: 1,
        };
        assert_eq!(token.to_string(), "Token<String, \"key\">");
        assert_eq!(Token::end_of_input(4).to_string(), "Token<EndOfInput, >");
    }
}
