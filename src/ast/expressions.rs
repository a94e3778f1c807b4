use crate::lexer::tokens::Token;

use super::ast::Node;

/// Expression Variants
///
/// The fixed set of value-producing node kinds. Each variant's render and
/// token-literal behaviour lives in the exhaustive matches below, so adding a
/// variant is a compile-time checklist.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub token: Token,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

/// A unary operation, `!operand` or `-operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

/// A binary operation; the operator token sits between two owned subtrees.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => &ident.token.literal,
            Expression::Integer(literal) => &literal.token.literal,
            Expression::Float(literal) => &literal.token.literal,
            Expression::Boolean(boolean) => &boolean.token.literal,
            Expression::Prefix(prefix) => &prefix.token.literal,
            Expression::Infix(infix) => &infix.token.literal,
        }
    }

    fn render(&self) -> String {
        match self {
            Expression::Identifier(ident) => ident.value.clone(),
            Expression::Integer(literal) => literal.token.literal.clone(),
            Expression::Float(literal) => literal.token.literal.clone(),
            Expression::Boolean(boolean) => boolean.token.literal.clone(),
            Expression::Prefix(prefix) => {
                format!("({}{})", prefix.operator, prefix.right.render())
            }
            Expression::Infix(infix) => format!(
                "({} {} {})",
                infix.left.render(),
                infix.operator,
                infix.right.render()
            ),
        }
    }
}
