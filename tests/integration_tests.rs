//! Integration tests for the full front end.
//!
//! These tests drive the pipeline end to end: source text through the lexer
//! and parser to a rendered program plus accumulated diagnostics.

use aflang::{
    ast::ast::Node,
    ast::statements::Statement,
    lexer::lexer::Lexer,
    lexer::tokens::TokenKind,
    parser::parser::Parser,
};

#[test]
fn test_parse_mixed_statement_kinds() {
    let source = "let x = 5; return 10; a + b * c;";
    let (program, errors) = aflang::parse(source);

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(program.statements.len(), 3);
    assert!(matches!(program.statements[0], Statement::Let(_)));
    assert!(matches!(program.statements[1], Statement::Return(_)));
    assert!(matches!(program.statements[2], Statement::Expression(_)));

    // Let/return values are skipped in this milestone, so their rendered
    // forms carry no value expression.
    assert_eq!(program.render(), "let x = ;return;(a + (b * c))");
}

#[test]
fn test_precedence_end_to_end() {
    let tests = [
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-a * b + c", "(((-a) * b) + c)"),
    ];

    for (input, expected) in tests {
        let (program, errors) = aflang::parse(input);
        assert!(errors.is_empty(), "unexpected errors for {:?}: {:?}", input, errors);
        assert_eq!(program.render(), expected, "for input {:?}", input);
    }
}

#[test]
fn test_error_recovery_keeps_later_statements() {
    let source = "let x 5; let y = 8; @;";
    let (program, errors) = aflang::parse(source);

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert!(messages.contains(&"expected next token to be =, got INT instead".to_string()));
    // The lexer turned `@` into an Illegal token; the parser reports it.
    assert!(messages.contains(&"no prefix parse function for ILLEGAL found".to_string()));

    let let_names: Vec<&str> = program
        .statements
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::Let(let_stmt) => Some(let_stmt.name.value.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(let_names, ["y"]);
}

#[test]
fn test_repl_style_input_without_semicolon() {
    let (program, errors) = aflang::parse("5 + 5");

    assert!(errors.is_empty());
    assert_eq!(program.render(), "(5 + 5)");
}

#[test]
fn test_lexer_is_exhausted_after_program() {
    let mut lexer = Lexer::new("let x = 1;".to_string());
    let mut parser_input = vec![];
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EOF {
            break;
        }
        parser_input.push(token);
    }

    assert_eq!(parser_input.len(), 5);
    // Exhausted lexers stay exhausted.
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_parser_errors_accessor_matches_convenience_result() {
    let lexer = Lexer::new("let x 5;".to_string());
    let mut parser = Parser::new(lexer);
    let _ = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.errors()[0].to_string(),
        "expected next token to be =, got INT instead"
    );
}
