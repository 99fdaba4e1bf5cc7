//! Tokens for the glint language
//!
//! Defines the closed set of token kinds the lexer can produce and the
//! static keyword table.

use std::fmt;

/// All token kinds of the glint language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================
    // Special
    // =========================================
    /// Unrecognized byte
    Illegal,
    /// End of input
    Eof,

    // =========================================
    // Identifiers and literals
    // =========================================
    /// Identifier: `foo`, `add_two`, `_x`
    Ident,
    /// Unsigned integer literal: `5`, `007`
    Int,

    // =========================================
    // Operators
    // =========================================
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    // =========================================
    // Delimiters
    // =========================================
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // =========================================
    // Keywords
    // =========================================
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

/// Every reserved word together with the kind it resolves to.
///
/// Keyword lookup and [`TokenKind::is_keyword`] both read this table.
pub const KEYWORDS: [(&str, TokenKind); 7] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

impl TokenKind {
    /// Returns true if the token is a keyword
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == *self)
    }

    /// Resolves an identifier spelling to a keyword, if it is one.
    ///
    /// Matching is exact and case-sensitive: `Let` is an identifier.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|&&(spelling, _)| spelling == s)
            .map(|&(_, kind)| kind)
    }

    /// Canonical name of the kind, as shown in token dumps
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A token and the exact text it was formed from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Source text of the token, empty for `Eof`
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Checks if the token is of a specific kind
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Checks if it is end of input
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Checks if it is an unrecognized byte
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}
