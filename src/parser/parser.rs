//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from
//! the lexer through a two-token cursor (current + one token of lookahead)
//! and dispatches through lookup tables:
//!
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Parse errors never abort the run; they accumulate on the parser while the
//! statement loop advances past the failure and keeps going.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and a two-token cursor over its output, the
/// accumulated error list, and the lookup tables for statement and expression
/// parsing. A parser is used for exactly one source unit and then discarded.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token currently being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors recorded so far, in source order
    errors: Vec<ParseError>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// Primes the current/peek cursor with the first two tokens and registers
    /// all parsing handlers, so the parser is ready for `parse_program`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses statements until EOF, returning the program built from every
    /// statement that parsed cleanly.
    ///
    /// Failures are recorded in the error list and their statements dropped;
    /// the loop advances at least one token per iteration, so a bad token can
    /// never stall it. Callers must treat a non-empty [`Parser::errors`] list
    /// as a failed parse even though a (possibly partial) program is
    /// returned.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => self.errors.push(error),
            }
            self.advance();
        }

        program
    }

    /// Returns the errors recorded during `parse_program`, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, yielding the recorded errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances the cursor by one token and returns the token that was
    /// current before the call.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, std::mem::replace(&mut self.peek, next))
    }

    /// Expects the lookahead token to be of the specified kind and advances
    /// onto it.
    ///
    /// On a mismatch nothing is consumed and the returned error names both
    /// the expected and the actual kind. Every grammar branch that commits to
    /// a token goes through here.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<&Token, ParseError> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(&self.current)
        } else {
            Err(ParseError::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            })
        }
    }

    /// Returns the binding power of the lookahead token, or the default for
    /// tokens that are not infix operators.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// The binding power recorded here is what the precedence-climbing loop
    /// compares against; only infix operators get one.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}
