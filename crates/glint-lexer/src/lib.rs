//! glint-lexer - Lexical scanner for the glint language
//!
//! This crate converts glint source code into a sequence of tokens, one
//! token per call, for a downstream parser.
//!
//! # Features
//!
//! - Byte-oriented ASCII scanning
//! - One-byte lookahead for `==` and `!=`
//! - Keywords: `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//! - Unrecognized bytes become `Illegal` tokens, never errors
//!
//! # Example
//!
//! ```rust
//! use glint_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let five = 5;");
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().literal, "five");
//!
//! let rest: Vec<_> = lexer.map(|t| t.kind).collect();
//! assert_eq!(rest, [TokenKind::Assign, TokenKind::Int, TokenKind::Semicolon]);
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind, KEYWORDS};
