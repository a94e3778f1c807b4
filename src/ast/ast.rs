use super::statements::Statement;

/// Behaviour shared by every AST node.
///
/// `token_literal` exposes the literal of the node's defining token, used in
/// diagnostics and tests. `render` reconstructs a canonical source form; it
/// normalises grouping with explicit parentheses, so it is not guaranteed to
/// byte-match the original input.
pub trait Node {
    fn token_literal(&self) -> &str;
    fn render(&self) -> String;
}

/// The parse result of one source unit: an ordered sequence of statements
/// owning, transitively, every expression beneath them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program { statements: vec![] }
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }

    fn render(&self) -> String {
        self.statements.iter().map(|stmt| stmt.render()).collect()
    }
}
