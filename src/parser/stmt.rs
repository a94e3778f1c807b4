use crate::{
    ast::{
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement, Statement},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token: registered statement handlers first,
/// anything else is a bare expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let token_kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// Parses `let <name> = ...;`.
///
/// Only the binding structure is captured in this milestone: the value
/// expression is consumed token-by-token up to the semicolon, not parsed.
/// A mismatched identifier or `=` aborts the statement without consuming the
/// offending token.
pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let let_token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?.clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;

    // The EOF check keeps an unterminated statement from spinning here.
    while !parser.current_token_is(TokenKind::Semicolon) && !parser.current_token_is(TokenKind::EOF)
    {
        parser.advance();
    }

    Ok(Statement::Let(LetStatement {
        token: let_token,
        name,
        value: None,
    }))
}

/// Parses `return ...;`, skipping the value to the semicolon as in
/// [`parse_let_stmt`].
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let return_token = parser.current_token().clone();
    parser.advance();

    while !parser.current_token_is(TokenKind::Semicolon) && !parser.current_token_is(TokenKind::EOF)
    {
        parser.advance();
    }

    Ok(Statement::Return(ReturnStatement {
        token: return_token,
        value: None,
    }))
}

/// Parses a full expression at lowest precedence. The trailing semicolon is
/// optional so REPL-style input like `5 + 5` parses as a statement.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}
