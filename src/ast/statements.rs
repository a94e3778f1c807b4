use crate::lexer::tokens::Token;

use super::{
    ast::Node,
    expressions::{Expression, Identifier},
};

/// Statement Variants
///
/// Statements produce no value; a program is an ordered sequence of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

/// `let <name> = <value>;`
///
/// `value` stays `None` in the current milestone: the parser consumes the
/// right-hand side up to the semicolon without building an expression for it.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

/// `return <value>;`, with the same unparsed-value milestone as `let`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

/// A bare expression used in statement position, REPL-style. This is the only
/// statement kind that carries a fully parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.literal,
            Statement::Return(stmt) => &stmt.token.literal,
            Statement::Expression(stmt) => &stmt.token.literal,
        }
    }

    fn render(&self) -> String {
        match self {
            Statement::Let(stmt) => {
                let mut out = String::new();
                out.push_str(&stmt.token.literal);
                out.push(' ');
                out.push_str(&stmt.name.value);
                out.push_str(" = ");
                if let Some(value) = &stmt.value {
                    out.push_str(&value.render());
                }
                out.push(';');
                out
            }
            Statement::Return(stmt) => {
                let mut out = String::new();
                out.push_str(&stmt.token.literal);
                if let Some(value) = &stmt.value {
                    out.push(' ');
                    out.push_str(&value.render());
                }
                out.push(';');
                out
            }
            Statement::Expression(stmt) => stmt.expression.render(),
        }
    }
}
