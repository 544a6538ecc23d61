//! Logos-based lexer for call-expression text.
//!
//! Only distinguishes what argument-shape classification needs: brackets,
//! commas, literals and everything else.

use std::ops::Range;

use logos::Logos;

/// Token kinds of a call expression.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum CallToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Literal expressions
    #[token("true")]
    #[token("false")]
    BoolLiteral,
    #[token("null")]
    NullLiteral,
    #[token("default")]
    DefaultLiteral,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,
    #[regex(r#"@"([^"]|"")*""#)]
    VerbatimStringLiteral,
    #[regex(r"'([^'\\\n]|\\[^\n][^'\n]*)'")]
    CharLiteral,
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[A-Za-z0-9_]*")]
    NumericLiteral,

    // Interpolated strings are expressions, not literals
    #[regex(r#"\$"([^"\\\n]|\\.)*""#)]
    InterpolatedString,

    #[regex(r"@?[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[regex(r"[-+*/%<>=!&|^~?.;]")]
    Operator,
}

impl CallToken {
    /// True for tokens that on their own form a literal expression.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            CallToken::BoolLiteral
                | CallToken::NullLiteral
                | CallToken::DefaultLiteral
                | CallToken::StringLiteral
                | CallToken::VerbatimStringLiteral
                | CallToken::CharLiteral
                | CallToken::NumericLiteral
        )
    }
}

/// A token with its byte range; `kind` is `None` for unrecognized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: Option<CallToken>,
    pub span: Range<usize>,
}

impl Lexeme {
    pub fn is(&self, kind: CallToken) -> bool {
        self.kind == Some(kind)
    }
}

/// Tokenize call-expression text, keeping unrecognized input as error lexemes.
pub fn tokenize(input: &str) -> Vec<Lexeme> {
    let mut lexer = CallToken::lexer(input);
    let mut lexemes = Vec::new();
    while let Some(token) = lexer.next() {
        lexemes.push(Lexeme {
            kind: token.ok(),
            span: lexer.span(),
        });
    }
    lexemes
}
