use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A single recoverable parse diagnostic.
///
/// The `Display` wording is part of the front end's contract; downstream
/// tooling matches on these strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    MissingPrefixFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    MalformedInteger { literal: String },
    #[error("could not parse {literal:?} as float")]
    MalformedFloat { literal: String },
}
