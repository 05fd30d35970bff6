//! The byte-based tokenizer (lexer).
//!
//! Consumes the raw input as `&[u8]` and produces `Token`s, one per
//! lexical unit, tracking the line number for diagnostics. Strings are
//! taken verbatim: there is no escape processing and a raw newline ends
//! the scan with an error.

use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};
use log::{debug, trace};
use memchr::memchr2;
use std::borrow::Cow;
use std::str;

// --- The Lookup Table (LUT) ---
// One entry per byte value; anything left at 0 is an unexpected character.
const W: u8 = 1; // Whitespace other than newline
const N: u8 = 2; // Newline
const S: u8 = 3; // Structural
const A: u8 = 4; // Identifier (ASCII letter or '_')
const D: u8 = 5; // Digit
const Q: u8 = 6; // Quote

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    table[b' ' as usize] = W;
    table[b'\t' as usize] = W;
    table[b'\r' as usize] = W;
    table[b'\n' as usize] = N;

    table[b'{' as usize] = S;
    table[b'}' as usize] = S;
    table[b'[' as usize] = S;
    table[b']' as usize] = S;
    table[b':' as usize] = S;
    table[b',' as usize] = S;

    table[b'"' as usize] = Q;
    table[b'_' as usize] = A;

    let mut b = b'a';
    while b <= b'z' {
        table[b as usize] = A;
        table[b.to_ascii_uppercase() as usize] = A;
        b += 1;
    }

    let mut d = b'0';
    while d <= b'9' {
        table[d as usize] = D;
        d += 1;
    }

    table
};

/// Tokenizes `source` completely.
///
/// Returns every token in source order, or the first lexical error. No
/// partial token sequence is returned on failure.
///
/// # Examples
/// ```
/// use jsoncheck::{tokenize, TokenKind};
///
/// let tokens = tokenize(br#"{"id": 7}"#).unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::LeftBrace,
///         TokenKind::String,
///         TokenKind::Colon,
///         TokenKind::Number,
///         TokenKind::RightBrace,
///     ]
/// );
/// ```
pub fn tokenize(source: &[u8]) -> Result<Vec<Token<'_>>, LexError> {
    let tokens = Tokenizer::new(source).collect::<Result<Vec<_>, _>>()?;
    debug!(
        "tokenized {} bytes into {} tokens",
        source.len(),
        tokens.len()
    );
    Ok(tokens)
}

/// The internal tokenizer.
///
/// Yields `Result<Token, LexError>` and stops for good after the first error.
pub(crate) struct Tokenizer<'a> {
    /// The raw byte slice of the input JSON.
    bytes: &'a [u8],
    /// Where the token being scanned begins.
    start: usize,
    /// The next byte to read. Never behind `start`.
    cursor: usize,
    /// The current line number (1-indexed).
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Tokenizer {
            bytes,
            start: 0,
            cursor: 0,
            line: 1,
        }
    }

    fn error(&self, message: impl Into<String>) -> LexError {
        LexError {
            line: self.line,
            message: message.into(),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    #[inline]
    fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.cursor + 1).copied()
    }

    #[inline]
    fn is(byte: Option<u8>, class: u8) -> bool {
        byte.is_some_and(|b| BYTE_PROPERTIES[b as usize] == class)
    }

    /// Skips insignificant whitespace, counting newlines.
    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            match BYTE_PROPERTIES[byte as usize] {
                W => {}
                N => self.line += 1,
                _ => break,
            }
            self.cursor += 1;
        }
    }

    /// Builds a token spanning `start..cursor`.
    fn make_token(&self, kind: TokenKind, literal: Literal<'a>) -> Token<'a> {
        let bytes = self.bytes;
        Token {
            kind,
            lexeme: String::from_utf8_lossy(&bytes[self.start..self.cursor]),
            literal,
            line: self.line,
        }
    }

    fn lex_structural(&self, byte: u8) -> Result<Token<'a>, LexError> {
        let kind = match byte {
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b',' => TokenKind::Comma,
            b':' => TokenKind::Colon,
            other => return Err(self.unexpected_character(other)),
        };
        Ok(self.make_token(kind, Literal::Absent))
    }

    /// Scans a string. The opening quote is already consumed.
    ///
    /// `memchr2` finds whichever of the closing quote or a raw newline
    /// comes first.
    fn lex_string(&mut self) -> Result<Token<'a>, LexError> {
        let bytes = self.bytes;
        let rest = &bytes[self.cursor..];

        match memchr2(b'"', b'\n', rest) {
            None => {
                self.cursor = bytes.len();
                Err(self.error("Unterminated string"))
            }
            Some(i) if rest[i] == b'\n' => {
                self.cursor += i;
                Err(self.error("JSON doesn't allow newlines in strings"))
            }
            Some(i) => {
                let content = &rest[..i];
                self.cursor += i + 1; // Consume the closing '"'
                Ok(self.make_token(
                    TokenKind::String,
                    Literal::Text(String::from_utf8_lossy(content)),
                ))
            }
        }
    }

    /// Scans an identifier, which must be one of the three keywords.
    fn lex_identifier(&mut self) -> Result<Token<'a>, LexError> {
        while Self::is(self.peek(), A) {
            self.cursor += 1;
        }

        let bytes = self.bytes;
        let (kind, literal) = match &bytes[self.start..self.cursor] {
            b"true" => (TokenKind::True, Literal::Boolean(true)),
            b"false" => (TokenKind::False, Literal::Boolean(false)),
            b"null" => (TokenKind::Null, Literal::Absent),
            other => {
                return Err(self.error(format!(
                    "Unexpected identifier '{}'.",
                    String::from_utf8_lossy(other)
                )))
            }
        };
        Ok(self.make_token(kind, literal))
    }

    /// Scans `digits ('.' digits)?`. Signs and exponents are not part of
    /// the grammar, and a '.' without a digit after it is left alone.
    fn lex_number(&mut self) -> Result<Token<'a>, LexError> {
        while Self::is(self.peek(), D) {
            self.cursor += 1;
        }

        if self.peek() == Some(b'.') && Self::is(self.peek_next(), D) {
            self.cursor += 1; // Consume the '.'
            while Self::is(self.peek(), D) {
                self.cursor += 1;
            }
        }

        let bytes = self.bytes;
        let raw = &bytes[self.start..self.cursor];
        let value = str::from_utf8(raw)
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .ok_or_else(|| {
                self.error(format!(
                    "Invalid number '{}'.",
                    String::from_utf8_lossy(raw)
                ))
            })?;

        Ok(self.make_token(TokenKind::Number, Literal::Number(value)))
    }

    /// Printable ASCII is shown as-is, any other byte as `\xNN`.
    fn unexpected_character(&self, byte: u8) -> LexError {
        if byte.is_ascii_graphic() {
            self.error(format!("Unexpected character {}.", byte as char))
        } else {
            self.error(format!("Unexpected character \\x{:02X}.", byte))
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, LexError>;

    /// Gets the next `Token` from the input.
    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let byte = self.peek()?;
        self.start = self.cursor;
        self.cursor += 1;

        let result = match BYTE_PROPERTIES[byte as usize] {
            S => self.lex_structural(byte),
            Q => self.lex_string(),
            A => self.lex_identifier(),
            D => self.lex_number(),
            _ => Err(self.unexpected_character(byte)),
        };

        match &result {
            Ok(token) => trace!("{}", token),
            // Nothing after the first error is meaningful.
            Err(_) => self.cursor = self.bytes.len(),
        }
        Some(result)
    }
}
