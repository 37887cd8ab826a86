//! Token pattern table
//!
//! The scanner tries these patterns in declaration order against the
//! unconsumed text and the first match wins. Order matters:
//! - identifiers and numbers come before single-character punctuation so
//!   longer matches are not pre-empted;
//! - `==` is a single pattern, there is no lone `=` token in the grammar.
//!
//! The table is compiled once per process and shared by every scanner.

use super::tokens::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern rows: kind, anchored regex, requires a separator after the match
const PATTERN_ROWS: &[(TokenKind, &str, bool)] = &[
    (TokenKind::Eof, r"\A\z", false),
    (TokenKind::Id, r"\A[a-z][a-z_]*", true),
    (TokenKind::Number, r"\A[0-9]+", true),
    (TokenKind::NewLine, r"\A\n", false),
    (TokenKind::OpenBlock, r"\A\{", false),
    (TokenKind::CloseBlock, r"\A\}", false),
    (TokenKind::OpenParentheses, r"\A\(", false),
    (TokenKind::CloseParentheses, r"\A\)", false),
    (TokenKind::Equals, r"\A==", false),
    (TokenKind::Plus, r"\A\+", false),
    (TokenKind::Minus, r"\A-", false),
    (TokenKind::Comma, r"\A,", false),
];

/// Characters that may legally follow a separator-terminated token
pub const TOKEN_SEPARATORS: &[char] = &['{', '}', '(', ')', ',', '+', '-', '='];

/// One compiled row of the pattern table
#[derive(Debug)]
pub struct TokenPattern {
    pub kind: TokenKind,
    pub regex: Regex,
    /// The regex does not bound the token by itself, so the next character
    /// must be a separator or the end of input
    pub requires_separator: bool,
}

impl TokenPattern {
    /// Length in bytes of the match at the start of `text`, if any
    pub fn match_len(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|m| m.end())
    }

    /// Final kind for a matched lexeme. Identifiers that spell a reserved
    /// word become that keyword.
    pub fn classify(&self, lexeme: &str) -> TokenKind {
        match self.kind {
            TokenKind::Id => TokenKind::keyword(lexeme).unwrap_or(TokenKind::Id),
            kind => kind,
        }
    }

    /// Whether tokens produced by this pattern keep their lexeme
    pub fn keeps_text(&self) -> bool {
        matches!(self.kind, TokenKind::Id | TokenKind::Number)
    }
}

pub static TOKEN_PATTERNS: Lazy<Vec<TokenPattern>> = Lazy::new(|| {
    PATTERN_ROWS
        .iter()
        .map(|(kind, pattern, requires_separator)| TokenPattern {
            kind: *kind,
            regex: Regex::new(pattern).expect("token patterns are valid regexes"),
            requires_separator: *requires_separator,
        })
        .collect()
});

/// Check whether `next` may follow a separator-terminated token.
/// `None` stands for the end of input.
pub fn is_token_separator(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_whitespace() || TOKEN_SEPARATORS.contains(&c),
    }
}

/// The first pattern matching at the start of `text`, with the match length
pub fn match_token(text: &str) -> Option<(&'static TokenPattern, usize)> {
    TOKEN_PATTERNS
        .iter()
        .find_map(|pattern| pattern.match_len(text).map(|len| (pattern, len)))
}
