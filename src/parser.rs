//! Contains the recursive-descent `Parser`.
//!
//! One method per nonterminal, all sharing a single read cursor:
//!
//! ```text
//! document := object | array
//! value    := string | number | true | false | null | object | array
//! object   := '{' [ member (',' member)* ] '}'
//! member   := string ':' value
//! array    := '[' [ value (',' value)* ] ']'
//! ```
//!
//! Literal values are checked and dropped; nothing is built.

use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use log::debug;

/// The recursive-descent parser.
///
/// This is the token-level entry point: hand it the output of
/// [`crate::tokenize`] and a nesting limit. Borrows the tokens; owns only
/// its cursor and depth counter.
///
/// # Examples
/// ```
/// use jsoncheck::limits::DEFAULT_MAX_DEPTH;
/// use jsoncheck::{tokenize, Parser};
///
/// let tokens = tokenize(br#"{"a": [1, 2.5]}"#).unwrap();
/// assert!(Parser::new(&tokens, DEFAULT_MAX_DEPTH).parse().is_ok());
///
/// let tokens = tokenize(b"[1,]").unwrap();
/// let err = Parser::new(&tokens, DEFAULT_MAX_DEPTH).parse().unwrap_err();
/// assert_eq!(err.lexeme, "]");
/// ```
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    /// Index of the next unread token. Never past `tokens.len()`.
    current: usize,
    /// Stands in for every read past the last token.
    end_of_input: Token<'a>,
    /// The maximum allowed nesting depth.
    max_depth: usize,
    /// The *current* nesting depth.
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>], max_depth: usize) -> Self {
        let last_line = tokens.last().map_or(1, |t| t.line);
        Parser {
            tokens,
            current: 0,
            end_of_input: Token::end_of_input(last_line),
            max_depth,
            depth: 0,
        }
    }

    /// Parses one document and requires that nothing follows it.
    pub fn parse(mut self) -> Result<(), ParseError> {
        self.document()?;

        if !self.is_at_end() {
            return Err(self.error_at("Unexpected trailing token.", self.peek()));
        }
        debug!("validated {} tokens", self.tokens.len());
        Ok(())
    }

    // --- Cursor helpers ---

    fn peek(&self) -> &Token<'a> {
        self.tokens.get(self.current).unwrap_or(&self.end_of_input)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Returns the next token and moves past it. Stays put at the end.
    fn advance(&mut self) -> Token<'a> {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the next token if it is of `kind`.
    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of `kind` or fails with `message`.
    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<(), ParseError> {
        if self.matches(kind) {
            Ok(())
        } else {
            Err(self.error_at(message, self.peek()))
        }
    }

    fn error_at(&self, message: &str, token: &Token<'_>) -> ParseError {
        ParseError {
            line: token.line,
            message: message.to_string(),
            lexeme: token.lexeme.to_string(),
        }
    }

    /// Enters a container whose opening token is `opener`.
    fn descend(&mut self, opener: &Token<'_>) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error_at("Maximum nesting depth exceeded.", opener));
        }
        self.depth += 1;
        Ok(())
    }

    // --- Grammar ---

    fn document(&mut self) -> Result<(), ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::LeftBrace => self.object(&token),
            TokenKind::LeftBracket => self.array(&token),
            _ => Err(self.error_at("Unexpected token.", &token)),
        }
    }

    fn value(&mut self) -> Result<(), ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => Ok(()),
            TokenKind::LeftBrace => self.object(&token),
            TokenKind::LeftBracket => self.array(&token),
            TokenKind::EndOfInput => Err(self.error_at("Missing key-value pair.", &token)),
            TokenKind::RightBrace
            | TokenKind::RightBracket
            | TokenKind::Comma
            | TokenKind::Colon => Err(self.error_at("Unexpected token.", &token)),
        }
    }

    /// The opening `{` has been consumed.
    fn object(&mut self, opener: &Token<'_>) -> Result<(), ParseError> {
        self.descend(opener)?;

        if !self.check(TokenKind::RightBrace) {
            self.member()?;
            while self.matches(TokenKind::Comma) {
                self.member()?;
            }
        }

        self.consume(
            TokenKind::RightBrace,
            "Expected a '}' or separator between values.",
        )?;
        self.depth -= 1;
        Ok(())
    }

    fn member(&mut self) -> Result<(), ParseError> {
        self.consume(TokenKind::String, "Expected a key of type 'String'.")?;
        self.consume(TokenKind::Colon, "Expected ':' after key.")?;
        self.value()
    }

    /// The opening `[` has been consumed.
    fn array(&mut self, opener: &Token<'_>) -> Result<(), ParseError> {
        self.descend(opener)?;

        if !self.check(TokenKind::RightBracket) {
            self.value()?;
            while self.matches(TokenKind::Comma) {
                self.value()?;
            }
        }

        self.consume(
            TokenKind::RightBracket,
            "Expected a ']' or separator between values.",
        )?;
        self.depth -= 1;
        Ok(())
    }
}

// --- Unit Tests for Parser ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::DEFAULT_MAX_DEPTH;
    use crate::tokenizer::tokenize;

    fn parse_str(input: &str) -> Result<(), ParseError> {
        parse_with_depth(input, DEFAULT_MAX_DEPTH)
    }

    fn parse_with_depth(input: &str, depth: usize) -> Result<(), ParseError> {
        let tokens = tokenize(input.as_bytes()).expect("input should tokenize");
        Parser::new(&tokens, depth).parse()
    }

    #[test]
    fn test_parser_accepts_documents() {
        assert!(parse_str("{}").is_ok());
        assert!(parse_str("[]").is_ok());
        assert!(parse_str(r#"{"a":1,"b":[true,false,null]}"#).is_ok());
        assert!(parse_str(r#"[{"a": 1, "b": [null, {"c": {}}]}, [[]], "x", 2.5]"#).is_ok());
    }

    #[test]
    fn test_parser_rejects_scalar_root() {
        let err = parse_str(r#""hello""#).unwrap_err();
        assert_eq!(err.message, "Unexpected token.");
        assert_eq!(err.lexeme, "\"hello\"");

        let err = parse_str("42").unwrap_err();
        assert_eq!(err.to_string(), "Error [line 1]. Unexpected token. Got token '42'.");

        let err = parse_str("").unwrap_err();
        assert_eq!(err.message, "Unexpected token.");
        assert_eq!(err.lexeme, "");
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_parser_object_errors() {
        let err = parse_str(r#"{"a":}"#).unwrap_err();
        assert_eq!(err.message, "Unexpected token.");
        assert_eq!(err.lexeme, "}");

        let err = parse_str(r#"{"a" 1}"#).unwrap_err();
        assert_eq!(err.message, "Expected ':' after key.");
        assert_eq!(err.lexeme, "1");

        let err = parse_str("{1: 2}").unwrap_err();
        assert_eq!(err.message, "Expected a key of type 'String'.");

        let err = parse_str(r#"{"a": 1 "b": 2}"#).unwrap_err();
        assert_eq!(err.message, "Expected a '}' or separator between values.");
        assert_eq!(err.lexeme, "\"b\"");
    }

    #[test]
    fn test_parser_array_errors() {
        let err = parse_str("[1 true]").unwrap_err();
        assert_eq!(err.message, "Expected a ']' or separator between values.");
        assert_eq!(err.lexeme, "true");

        let err = parse_str("[:]").unwrap_err();
        assert_eq!(err.message, "Unexpected token.");
        assert_eq!(err.lexeme, ":");
    }

    #[test]
    fn test_parser_rejects_trailing_commas() {
        let err = parse_str(r#"{"a":1,}"#).unwrap_err();
        assert_eq!(err.message, "Expected a key of type 'String'.");
        assert_eq!(err.lexeme, "}");

        let err = parse_str("[1, 2,]").unwrap_err();
        assert_eq!(err.message, "Unexpected token.");
        assert_eq!(err.lexeme, "]");

        let err = parse_str("[1,,2]").unwrap_err();
        assert_eq!(err.lexeme, ",");
    }

    #[test]
    fn test_parser_end_of_input() {
        let err = parse_str(r#"{"a":"#).unwrap_err();
        assert_eq!(err.message, "Missing key-value pair.");

        let err = parse_str("[1,\n2").unwrap_err();
        assert_eq!(err.message, "Expected a ']' or separator between values.");
        assert_eq!(err.lexeme, "");
        assert_eq!(err.line, 2);

        let err = parse_str("[").unwrap_err();
        assert_eq!(err.message, "Missing key-value pair.");
    }

    #[test]
    fn test_parser_rejects_trailing_tokens() {
        let err = parse_str("[1] [2]").unwrap_err();
        assert_eq!(err.message, "Unexpected trailing token.");
        assert_eq!(err.lexeme, "[");

        let err = parse_str("{}\n}").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_parser_reports_line_of_offending_token() {
        let input = "{\n  \"a\": 1,\n  \"b\": ]\n}";
        let err = parse_str(input).unwrap_err();
        assert_eq!(err.to_string(), "Error [line 3]. Unexpected token. Got token ']'.");
    }

    #[test]
    fn test_parser_depth_limit() {
        let evil_input = "[".repeat(101) + &"]".repeat(101);
        let err = parse_with_depth(&evil_input, 100).unwrap_err();
        assert_eq!(err.message, "Maximum nesting depth exceeded.");
        assert_eq!(err.lexeme, "[");

        let ok_input = "[".repeat(100) + &"]".repeat(100);
        assert!(parse_with_depth(&ok_input, 100).is_ok());

        // Depth is released when a container closes.
        let siblings = "[".to_string() + &vec!["[[]]"; 50].join(",") + "]";
        assert!(parse_with_depth(&siblings, 3).is_ok());

        let err = parse_with_depth(r#"{"a":{"b":{}}}"#, 2).unwrap_err();
        assert_eq!(err.lexeme, "{");
    }
}
