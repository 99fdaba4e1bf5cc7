//! Lexer for the glint language
//!
//! Converts source code into a sequence of tokens, one token per call to
//! [`Lexer::next_token`]. Scanning is byte-oriented and ASCII-only: any byte
//! the language does not recognize comes back as an `Illegal` token, so the
//! lexer is total over every byte string, valid UTF-8 or not.

use crate::token::{Token, TokenKind};
use glint_error::{Diagnostic, Diagnostics, ErrorCode};
use std::iter::FusedIterator;

/// The glint language Lexer
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// Source bytes being analyzed
    source: &'src [u8],
    /// Index of the current byte
    position: usize,
    /// Index of the next unread byte (always `position + 1`)
    read_position: usize,
    /// Byte at `position`, `None` once the input is exhausted
    current: Option<u8>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer positioned on the first byte of `source`.
    ///
    /// Accepts `&str` as well as raw bytes that need not be valid UTF-8.
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'src S) -> Self {
        let mut lexer = Self {
            source: source.as_ref(),
            position: 0,
            read_position: 0,
            current: None,
        };
        lexer.advance();
        lexer
    }

    /// Loads the byte at `read_position` and moves the cursor onto it.
    ///
    /// Clamps at the end of input, so advancing an exhausted lexer is a no-op.
    fn advance(&mut self) {
        self.current = self.source.get(self.read_position).copied();
        self.position = self.read_position.min(self.source.len());
        self.read_position = self.position + 1;
    }

    /// Returns the next byte without advancing
    fn peek(&self) -> Option<u8> {
        self.source.get(self.read_position).copied()
    }

    /// Skips spaces, tabs, newlines and carriage returns
    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.advance();
        }
    }

    /// Token for the single byte under the cursor
    fn single(&self, kind: TokenKind) -> Token {
        Token::new(kind, literal(&self.source[self.position..self.read_position]))
    }

    /// Two-byte operator if the next byte is `next`, otherwise the one-byte
    /// form. On a match the cursor ends on the second byte.
    fn either(&mut self, next: u8, single: TokenKind, double: TokenKind) -> Token {
        if self.peek() == Some(next) {
            let start = self.position;
            self.advance();
            Token::new(double, literal(&self.source[start..self.read_position]))
        } else {
            self.single(single)
        }
    }

    /// Consumes the maximal run of bytes matching `accept`
    fn read_while(&mut self, accept: fn(u8) -> bool) -> String {
        let source = self.source;
        let start = self.position;
        while self.current.is_some_and(accept) {
            self.advance();
        }
        literal(&source[start..self.position])
    }

    /// Reads the next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.current {
            Some(b'=') => self.either(b'=', TokenKind::Assign, TokenKind::Eq),
            Some(b'!') => self.either(b'=', TokenKind::Bang, TokenKind::NotEq),
            Some(b'+') => self.single(TokenKind::Plus),
            Some(b'-') => self.single(TokenKind::Minus),
            Some(b'/') => self.single(TokenKind::Slash),
            Some(b'*') => self.single(TokenKind::Asterisk),
            Some(b'<') => self.single(TokenKind::Lt),
            Some(b'>') => self.single(TokenKind::Gt),
            Some(b';') => self.single(TokenKind::Semicolon),
            Some(b'(') => self.single(TokenKind::LParen),
            Some(b')') => self.single(TokenKind::RParen),
            Some(b',') => self.single(TokenKind::Comma),
            Some(b'{') => self.single(TokenKind::LBrace),
            Some(b'}') => self.single(TokenKind::RBrace),
            None => Token::new(TokenKind::Eof, ""),
            // Identifier and number loops already stop past their text
            Some(ch) if is_letter(ch) => {
                let ident = self.read_while(is_letter);
                let kind = TokenKind::keyword_from_str(&ident).unwrap_or(TokenKind::Ident);
                return traced(Token::new(kind, ident));
            }
            Some(ch) if ch.is_ascii_digit() => {
                let number = self.read_while(|b| b.is_ascii_digit());
                return traced(Token::new(TokenKind::Int, number));
            }
            Some(ch) => Token::new(TokenKind::Illegal, char::from(ch)),
        };

        self.advance();
        traced(token)
    }

    /// Tokenizes the entire source, including the final `Eof` token
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }
}

/// Yields tokens up to, but not including, `Eof`
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Reads each byte as the `char` of the same value
fn literal(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

fn traced(token: Token) -> Token {
    tracing::trace!(kind = %token.kind, literal = %token.literal, "scanned token");
    token
}

/// Tokenizes source code and reports every illegal character as a diagnostic
pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S) -> (Vec<Token>, Diagnostics) {
    let tokens = Lexer::new(source).tokenize();
    let mut diagnostics = Diagnostics::new();

    for token in tokens.iter().filter(|t| t.is_illegal()) {
        diagnostics.push(
            Diagnostic::error(format!(
                "unexpected character '{}'",
                token.literal.escape_default()
            ))
            .with_code(ErrorCode::UNEXPECTED_CHAR)
            .with_help("glint source may only contain ASCII letters, digits, `_` and operators"),
        );
    }

    tracing::debug!(
        tokens = tokens.len(),
        illegal = diagnostics.len(),
        "tokenized source"
    );

    (tokens, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::token::TokenKind::*;

    fn lex<S: AsRef<[u8]> + ?Sized>(source: &S) -> Vec<(TokenKind, String)> {
        Lexer::new(source)
            .tokenize()
            .into_iter()
            .map(|t| (t.kind, t.literal))
            .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    fn expect(pairs: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
        pairs.iter().map(|&(k, l)| (k, l.to_string())).collect()
    }

    #[test]
    fn test_let_statement() {
        assert_eq!(
            lex("let five = 5;"),
            expect(&[
                (Let, "let"),
                (Ident, "five"),
                (Assign, "="),
                (Int, "5"),
                (Semicolon, ";"),
                (Eof, ""),
            ])
        );
    }

    #[test]
    fn test_equality_operators() {
        assert_eq!(
            lex("10 == 10;"),
            expect(&[(Int, "10"), (Eq, "=="), (Int, "10"), (Semicolon, ";"), (Eof, "")])
        );
        assert_eq!(
            lex("5 != 10;"),
            expect(&[(Int, "5"), (NotEq, "!="), (Int, "10"), (Semicolon, ";"), (Eof, "")])
        );
    }

    #[test]
    fn test_single_byte_operators() {
        assert_eq!(
            lex("=+-!/*<>;(),{}"),
            expect(&[
                (Assign, "="),
                (Plus, "+"),
                (Minus, "-"),
                (Bang, "!"),
                (Slash, "/"),
                (Asterisk, "*"),
                (Lt, "<"),
                (Gt, ">"),
                (Semicolon, ";"),
                (LParen, "("),
                (RParen, ")"),
                (Comma, ","),
                (LBrace, "{"),
                (RBrace, "}"),
                (Eof, ""),
            ])
        );
    }

    #[test]
    fn test_lookahead_pairs() {
        assert_eq!(kinds("==="), vec![Eq, Assign]);
        assert_eq!(kinds("!=="), vec![NotEq, Assign]);
        assert_eq!(kinds("!!="), vec![Bang, NotEq]);
        assert_eq!(kinds("= ="), vec![Assign, Assign]);
        assert_eq!(kinds("=!"), vec![Assign, Bang]);
        assert_eq!(kinds("!"), vec![Bang]);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("fn let true false if else return"),
            vec![Function, Let, True, False, If, Else, Return]
        );
        assert_eq!(kinds("Let FN returns iff"), vec![Ident, Ident, Ident, Ident]);
    }

    #[test]
    fn test_identifiers_stop_at_digits() {
        assert_eq!(
            lex("foo_bar x1 _"),
            expect(&[
                (Ident, "foo_bar"),
                (Ident, "x"),
                (Int, "1"),
                (Ident, "_"),
                (Eof, ""),
            ])
        );
    }

    #[test]
    fn test_numbers_keep_leading_zeros() {
        assert_eq!(
            lex("007 -3 1.5"),
            expect(&[
                (Int, "007"),
                (Minus, "-"),
                (Int, "3"),
                (Int, "1"),
                (Illegal, "."),
                (Int, "5"),
                (Eof, ""),
            ])
        );
    }

    #[test]
    fn test_illegal_bytes() {
        assert_eq!(lex("@"), expect(&[(Illegal, "@"), (Eof, "")]));
        assert_eq!(
            lex("a#b"),
            expect(&[(Ident, "a"), (Illegal, "#"), (Ident, "b"), (Eof, "")])
        );
    }

    #[test]
    fn test_nul_byte_is_not_end_of_input() {
        assert_eq!(
            lex("1\u{0}2"),
            expect(&[(Int, "1"), (Illegal, "\u{0}"), (Int, "2"), (Eof, "")])
        );
    }

    #[test]
    fn test_non_ascii_scans_byte_by_byte() {
        // "é" is encoded as 0xC3 0xA9
        assert_eq!(
            lex("é"),
            expect(&[(Illegal, "\u{c3}"), (Illegal, "\u{a9}"), (Eof, "")])
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(lex(""), expect(&[(Eof, "")]));
        assert_eq!(lex(" \t\r\n  "), expect(&[(Eof, "")]));
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token(), Token::new(Ident, "x"));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Token::new(Eof, ""));
        }
        assert_eq!(lexer.position, 1);
        assert_eq!(lexer.read_position, 2);
    }

    #[test]
    fn test_cursor_starts_on_first_byte() {
        let lexer = Lexer::new("ab");
        assert_eq!(lexer.current, Some(b'a'));
        assert_eq!(lexer.position, 0);
        assert_eq!(lexer.read_position, 1);

        let empty = Lexer::new("");
        assert_eq!(empty.current, None);
        assert_eq!(empty.position, 0);
        assert_eq!(empty.read_position, 1);
    }

    #[test]
    fn test_cursor_after_each_token_kind() {
        let mut lexer = Lexer::new("let==x+@7");

        let mut step = |kind: TokenKind, current: Option<u8>, position: usize| {
            assert_eq!(lexer.next_token().kind, kind);
            assert_eq!(lexer.current, current, "current byte after {:?}", kind);
            assert_eq!(lexer.position, position, "position after {:?}", kind);
            assert_eq!(lexer.read_position, position + 1);
        };

        // Identifier: no trailing advance, cursor sits on the boundary
        step(Let, Some(b'='), 3);
        // Two-byte operator: both bytes consumed, then one trailing advance
        step(Eq, Some(b'x'), 5);
        step(Ident, Some(b'+'), 6);
        // Single-byte operator and illegal byte: one trailing advance each
        step(Plus, Some(b'@'), 7);
        step(Illegal, Some(b'7'), 8);
        // Integer: the digit loop runs off the end of input
        step(Int, None, 9);
        // End of input: the trailing advance is clamped
        step(Eof, None, 9);
        step(Eof, None, 9);
    }

    #[test]
    fn test_invalid_utf8_bytes_are_illegal() {
        assert_eq!(
            lex(b"let x = \xff;"),
            expect(&[
                (Let, "let"),
                (Ident, "x"),
                (Assign, "="),
                (Illegal, "\u{ff}"),
                (Semicolon, ";"),
                (Eof, ""),
            ])
        );

        let (_, diagnostics) = tokenize(&[0x80u8, b'a', 0xfe][..]);
        assert_eq!(diagnostics.error_count(), 2);
    }

    #[test]
    fn test_program() {
        let source = "let add = fn(x, y) {\n  x + y;\n};\n\nif (5 < 10) {\n\treturn true;\n} else {\n\treturn false;\n}\n!-/*5;\n";

        assert_eq!(
            kinds(source),
            vec![
                Let, Ident, Assign, Function, LParen, Ident, Comma, Ident, RParen, LBrace,
                Ident, Plus, Ident, Semicolon, RBrace, Semicolon, If, LParen, Int, Lt, Int,
                RParen, LBrace, Return, True, Semicolon, RBrace, Else, LBrace, Return,
                False, Semicolon, RBrace, Bang, Minus, Slash, Asterisk, Int, Semicolon,
            ]
        );
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next(), Some(Token::new(Ident, "x")));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_tokenize_reports_illegal_characters() {
        let (tokens, diagnostics) = tokenize("let @ = 1 # 2;");

        assert_eq!(tokens.last(), Some(&Token::new(Eof, "")));
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.has_errors());

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["unexpected character '@'", "unexpected character '#'"]
        );
        assert!(diagnostics
            .iter()
            .all(|d| d.code == Some(ErrorCode::UNEXPECTED_CHAR)));
    }

    #[test]
    fn test_tokenize_clean_source() {
        let (tokens, diagnostics) = tokenize("let x = 1;");
        assert_eq!(tokens.len(), 6);
        assert!(diagnostics.is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn is_recognized(b: u8) -> bool {
            is_letter(b)
                || b.is_ascii_digit()
                || b" \t\n\r=+-!/*<>;(),{}".contains(&b)
        }

        proptest! {
            #[test]
            fn scanning_terminates_and_eof_repeats(input in "\\PC{0,64}") {
                let mut lexer = Lexer::new(&input);
                let mut calls = 0;
                while !lexer.next_token().is_eof() {
                    calls += 1;
                    prop_assert!(calls <= input.len());
                }
                for _ in 0..3 {
                    prop_assert!(lexer.next_token().is_eof());
                }
            }

            #[test]
            fn arbitrary_bytes_scan_one_token_per_unknown_byte(
                input in proptest::collection::vec(any::<u8>(), 0..64)
            ) {
                let tokens = Lexer::new(&input).tokenize();
                prop_assert!(tokens.len() <= input.len() + 1);
                prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));

                let illegal = tokens.iter().filter(|t| t.is_illegal()).count();
                let unknown = input.iter().filter(|&&b| !is_recognized(b)).count();
                prop_assert_eq!(illegal, unknown);
                for token in tokens.iter().filter(|t| t.is_illegal()) {
                    prop_assert_eq!(token.literal.chars().count(), 1);
                }
            }

            #[test]
            fn letter_run_is_one_token(input in "[a-zA-Z_]{1,32}") {
                let tokens = Lexer::new(&input).tokenize();
                prop_assert_eq!(tokens.len(), 2);
                let expected = TokenKind::keyword_from_str(&input).unwrap_or(Ident);
                prop_assert_eq!(tokens[0].kind, expected);
                prop_assert_eq!(&tokens[0].literal, &input);
            }

            #[test]
            fn digit_run_is_one_integer(input in "[0-9]{1,32}") {
                let tokens = Lexer::new(&input).tokenize();
                prop_assert_eq!(tokens.len(), 2);
                prop_assert_eq!(tokens[0].kind, Int);
                prop_assert_eq!(&tokens[0].literal, &input);
            }

            #[test]
            fn literals_cover_all_non_whitespace(input in "[ -~\t\r\n]{0,64}") {
                let tokens = Lexer::new(&input).tokenize();
                for token in &tokens {
                    prop_assert!(!token.literal.bytes().any(|b| b" \t\r\n".contains(&b)));
                }
                let joined: String = tokens.iter().map(|t| t.literal.as_str()).collect();
                let stripped: String = input
                    .chars()
                    .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
                    .collect();
                prop_assert_eq!(joined, stripped);
            }

            #[test]
            fn unrecognized_ascii_is_illegal(b in (0u8..0x80).prop_filter("unrecognized", |b| !is_recognized(*b))) {
                let input = char::from(b).to_string();
                prop_assert_eq!(
                    Lexer::new(&input).tokenize(),
                    vec![Token::new(Illegal, input.clone()), Token::new(Eof, "")]
                );
            }
        }
    }
}
