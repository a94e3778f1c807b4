//! Lexical analysis module for the AF front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens on demand. It handles:
//!
//! - Pull-based tokenization using a regex pattern table
//! - Recognition of keywords, identifiers, numeric literals, and operators
//! - Two-character operator disambiguation (`==`/`!=` vs `=`/`!`)
//! - Unrecognised input, emitted as `Illegal` tokens for the parser to report

pub mod lexer;
pub mod tokens;
