//! Integration tests for the glint scanner
//!
//! Exercises the public lexer surface end to end, the way a parser would
//! drive it: construct once, pull tokens until `Eof`.

use glint_error::Diagnostics;
use glint_lexer::{tokenize, Lexer, Token, TokenKind};

/// Scans `source` to completion, including the final `Eof` token
pub fn scan(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Scans `source` and returns `(kind, literal)` pairs, including `Eof`
pub fn scan_pairs(source: &str) -> Vec<(TokenKind, String)> {
    scan(source)
        .into_iter()
        .map(|t| (t.kind, t.literal))
        .collect()
}

/// Asserts that `source` produces exactly `expected`, `Eof` included
pub fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let expected: Vec<_> = expected
        .iter()
        .map(|&(kind, literal)| (kind, literal.to_string()))
        .collect();
    assert_eq!(scan_pairs(source), expected, "token mismatch for {:?}", source);
}

/// Asserts that source scans without any illegal characters
pub fn assert_clean(source: &str) -> Vec<Token> {
    let (tokens, diagnostics) = tokenize(source);
    if diagnostics.has_errors() {
        panic!(
            "Expected source to scan cleanly, but got diagnostics:\n{:?}",
            diagnostics
        );
    }
    tokens
}

/// Asserts that source contains illegal characters and returns the report
pub fn assert_illegal(source: &str) -> Diagnostics {
    let (_, diagnostics) = tokenize(source);
    if !diagnostics.has_errors() {
        panic!("Expected illegal characters in {:?}", source);
    }
    diagnostics
}
