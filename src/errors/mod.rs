//! Error types for the AF front end.
//!
//! The lexer never fails (unrecognised input becomes `Illegal` tokens), so
//! every error here is a parse error. Errors accumulate on the parser instead
//! of aborting it; callers inspect the list after `parse_program` returns.

pub mod errors;

#[cfg(test)]
mod tests;
