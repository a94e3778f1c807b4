//! Unit tests for error handling.
//!
//! The display strings are part of the front end's contract, so each variant
//! is pinned here.

use crate::errors::errors::ParseError;
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_message() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::Assignment,
        found: TokenKind::Int,
    };

    assert_eq!(error.to_string(), "expected next token to be =, got INT instead");
}

#[test]
fn test_unexpected_token_message_uses_symbolic_names() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::CloseParen,
        found: TokenKind::Semicolon,
    };

    assert_eq!(error.to_string(), "expected next token to be ), got ; instead");
}

#[test]
fn test_missing_prefix_fn_message() {
    let error = ParseError::MissingPrefixFn {
        kind: TokenKind::Illegal,
    };

    assert_eq!(error.to_string(), "no prefix parse function for ILLEGAL found");
}

#[test]
fn test_malformed_integer_message() {
    let error = ParseError::MalformedInteger {
        literal: "99999999999999999999".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_malformed_float_message() {
    let error = ParseError::MalformedFloat {
        literal: "bad".to_string(),
    };

    assert_eq!(error.to_string(), "could not parse \"bad\" as float");
}
