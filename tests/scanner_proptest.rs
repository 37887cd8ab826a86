//! Property-based tests for the scanner
//!
//! These check the stream-level guarantees: inputs without content scan to a
//! lone Eof, and peeking ahead never changes what is consumed.

use proptest::prelude::*;
use toylang::toylang::lexer::{scan, Scanner, Token, TokenKind};

/// A line holding only whitespace and an optional comment
fn blank_line() -> impl Strategy<Value = String> {
    "[ \t\r]{0,6}(#[a-z0-9 =+(),]{0,12})?"
}

/// A program on several unindented lines built from separated lexemes
fn flat_program() -> impl Strategy<Value = String> {
    let lexeme = prop::sample::select(vec![
        "abc", "snake_case", "12", "0", "(", ")", ",", "+", "-", "==", "def", "if", "return",
    ]);
    let line = prop::collection::vec(lexeme, 0..8).prop_map(|words| words.join(" "));
    prop::collection::vec(line, 0..6).prop_map(|lines| lines.join("\n"))
}

/// Drain a scanner, peeking before every consume
fn drain_with_peeks(source: &str, peeks: &[usize]) -> Vec<Token> {
    let mut scanner = Scanner::new();
    scanner.set_program(source);

    let mut tokens = Vec::new();
    for step in 0.. {
        let depth = peeks[step % peeks.len()];
        if depth > 0 {
            // Peeking past Eof fails, but must leave the stream untouched
            let _ = scanner.look_ahead(depth);
        }
        let token = scanner.next_token().expect("flat programs always scan");
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

proptest! {
    #[test]
    fn blank_input_scans_to_eof(lines in prop::collection::vec(blank_line(), 0..8)) {
        let source = lines.join("\n");
        let kinds: Vec<TokenKind> = scan(&source).unwrap().into_iter().map(|t| t.kind).collect();
        prop_assert_eq!(kinds, vec![TokenKind::Eof]);
    }

    #[test]
    fn look_ahead_never_advances(
        source in flat_program(),
        peeks in prop::collection::vec(0usize..5, 1..6),
    ) {
        let plain = scan(&source).unwrap();
        let peeked = drain_with_peeks(&source, &peeks);
        prop_assert_eq!(plain, peeked);
    }

    #[test]
    fn repeated_look_ahead_is_stable(source in flat_program(), depth in 1usize..4) {
        let mut scanner = Scanner::new();
        scanner.set_program(&source);
        let first = scanner.look_ahead(depth).ok().cloned();
        let second = scanner.look_ahead(depth).ok().cloned();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn flat_programs_never_open_blocks(source in flat_program()) {
        let tokens = scan(&source).unwrap();
        prop_assert!(tokens.iter().all(|t| !t.is(TokenKind::OpenBlock)));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn eof_never_follows_a_new_line(source in flat_program(), trailing in "\n{0,3}") {
        let tokens = scan(&format!("{}{}", source, trailing)).unwrap();
        let before_eof = tokens.iter().rev().nth(1);
        prop_assert!(before_eof.map_or(true, |t| t.is_not(TokenKind::NewLine)));
    }
}
