use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_number_kind, Token, TokenKind, RESERVED_LOOKUP};

/// A handler is tried once its pattern matches at the current position. It
/// consumes input and either produces a token or, for skip patterns, nothing.
pub type PatternHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct TokenPattern {
    regex: Regex,
    handler: PatternHandler,
}

/// Pull-based lexer over one in-memory source unit.
///
/// Patterns are tried in declaration order at the current offset; the first
/// one matching there wins, which is what makes `==` beat `=` and `!=` beat
/// `!`. Input that matches no pattern becomes an `Illegal` token rather than
/// an error; reporting is the parser's job. Once the input is exhausted every
/// further call yields an `EOF` token with an empty literal.
pub struct Lexer {
    patterns: Vec<TokenPattern>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            pos: 0,
            patterns: vec![
                TokenPattern { regex: Regex::new("[ \t\n\r]+").unwrap(), handler: skip_handler },
                TokenPattern { regex: Regex::new("[a-zA-Z_]+").unwrap(), handler: symbol_handler },
                TokenPattern { regex: Regex::new("[0-9]+(\\.[0-9]*)?").unwrap(), handler: number_handler },
                TokenPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                TokenPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                TokenPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
                TokenPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                TokenPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                TokenPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                TokenPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                TokenPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                TokenPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                TokenPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                TokenPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
                TokenPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                TokenPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                TokenPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
                TokenPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                TokenPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                TokenPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                TokenPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
            ],
            source,
        }
    }

    /// Returns the next token, advancing past any skipped input. Idempotent
    /// at end of input: keeps returning `EOF`.
    pub fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            let mut matched = None;

            for pattern in self.patterns.iter() {
                let match_here = pattern.regex.find(self.remainder());
                if match_here.is_some_and(|found| found.start() == 0) {
                    matched = Some((pattern.handler, pattern.regex.clone()));
                    break;
                }
            }

            match matched {
                Some((handler, regex)) => {
                    if let Some(token) = handler(self, &regex) {
                        return token;
                    }
                    // Skip handler consumed whitespace; try again from here.
                }
                None => {
                    let illegal = self.at();
                    self.advance_n(illegal.len_utf8());
                    return MK_TOKEN!(TokenKind::Illegal, illegal.to_string());
                }
            }
        }

        MK_TOKEN!(TokenKind::EOF, String::new())
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
    None
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_n(value.len());

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, value))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let literal = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_n(literal.len());

    Some(MK_TOKEN!(lookup_number_kind(&literal), literal))
}
