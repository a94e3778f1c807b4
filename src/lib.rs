#![allow(clippy::module_inception)]

//! Front end for the AF language: a pull-based lexer and a Pratt parser
//! producing a [`Program`](ast::ast::Program) AST plus a list of accumulated
//! parse errors.
//!
//! The crate does no I/O; callers hand one source unit to [`parse`] (or drive
//! [`lexer::lexer::Lexer`] and [`parser::parser::Parser`] directly) and check
//! the returned error list before consuming the AST.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

use crate::ast::ast::Program;
use crate::errors::errors::ParseError;
use crate::lexer::lexer::Lexer;
use crate::parser::parser::Parser;

/// Parses one source unit into a [`Program`] and the parse errors recorded
/// along the way.
///
/// A non-empty error list means the parse failed, even though the returned
/// program still holds every statement that parsed cleanly around the bad
/// positions.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let lexer = Lexer::new(source.to_string());
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    (program, parser.into_errors())
}

#[cfg(test)]
mod tests {
    use crate::ast::ast::Node;

    #[test]
    fn test_parse_entry_point() {
        let (program, errors) = super::parse("let x = 10; x + 5;");
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        assert_eq!(program.statements.len(), 2);
        assert_eq!(program.statements[1].render(), "(x + 5)");
    }

    #[test]
    fn test_parse_entry_point_reports_errors() {
        let (_, errors) = super::parse("let 5 = x;");
        assert!(!errors.is_empty());
    }
}
