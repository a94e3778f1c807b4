use crate::{
    ast::expressions::{
        Boolean, Expression, FloatLiteral, Identifier, InfixExpression, IntegerLiteral,
        PrefixExpression,
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence-climbing core.
///
/// Parses a NUD for the current token, then folds infix operators into the
/// left operand while the lookahead operator binds tighter than `bp`. The
/// strict comparison is what makes same-power chains left-associative. A
/// token with no LED (or a semicolon) simply terminates the expression.
///
/// Recursion depth tracks paren-nesting depth; there is no explicit guard.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, ParseError> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(ParseError::MissingPrefixFn { kind: token_kind });
    };

    let mut left = nud_fn(parser)?;

    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let token_kind = parser.peek_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Ok(left);
        };

        let operator_bp = parser.peek_binding_power();
        parser.advance();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.current_token().clone();

    Ok(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Int => {
            let value = token.literal.parse().map_err(|_| ParseError::MalformedInteger {
                literal: token.literal.clone(),
            })?;
            Ok(Expression::Integer(IntegerLiteral { token, value }))
        }
        // Also covers the bare-trailing-dot form: "15." converts to 15.0.
        TokenKind::Float => {
            let value = token.literal.parse().map_err(|_| ParseError::MalformedFloat {
                literal: token.literal.clone(),
            })?;
            Ok(Expression::Float(FloatLiteral { token, value }))
        }
        kind => Err(ParseError::MissingPrefixFn { kind }),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.current_token().clone();

    Ok(Expression::Boolean(Boolean {
        value: token.kind == TokenKind::True,
        token,
    }))
}

/// Unary `!` and `-`; the operand binds at unary power so prefix operators
/// end up tighter than any infix operator.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, ParseError> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// `( inner )` resets the precedence threshold; the closing paren is
/// mandatory and its absence is the classic `expected next token to be )`
/// diagnostic.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}
