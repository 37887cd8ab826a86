//! Token definitions for the toy language
//!
//! A token is a kind plus an optional lexeme. Only identifiers, keywords and
//! numbers carry text; punctuation and synthesized tokens do not. Grammar
//! matching looks at kinds only, the text and span are payload.
//!
//! Structural Tokens:
//!     OpenBlock, CloseBlock. These are synthesized from indentation changes by
//!     the scanner, never read from braces in the source, and play the role
//!     braces play in c-style languages.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// All token kinds the scanner can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Eof,
    Id,
    Number,
    NewLine,
    OpenBlock,
    CloseBlock,
    OpenParentheses,
    CloseParentheses,
    Equals,
    Plus,
    Minus,
    Comma,
    // Keywords
    Return,
    Def,
    If,
}

impl TokenKind {
    /// Reserved words and the kinds they turn into
    pub const KEYWORDS: &'static [(&'static str, TokenKind)] = &[
        ("return", TokenKind::Return),
        ("def", TokenKind::Def),
        ("if", TokenKind::If),
    ];

    /// The keyword kind for a lexeme, if it is a reserved word
    pub fn keyword(lexeme: &str) -> Option<TokenKind> {
        Self::KEYWORDS
            .iter()
            .find(|(word, _)| *word == lexeme)
            .map(|(_, kind)| *kind)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Id => "id",
            TokenKind::Number => "number",
            TokenKind::NewLine => "new_line",
            TokenKind::OpenBlock => "open_block",
            TokenKind::CloseBlock => "close_block",
            TokenKind::OpenParentheses => "open_parentheses",
            TokenKind::CloseParentheses => "close_parentheses",
            TokenKind::Equals => "equals",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Comma => "comma",
            TokenKind::Return => "return",
            TokenKind::Def => "def",
            TokenKind::If => "if",
        }
    }

    /// Check if this kind is one of the reserved words
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Return | TokenKind::Def | TokenKind::If)
    }

    /// Check if this kind is synthesized rather than read from the text
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenBlock | TokenKind::CloseBlock | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Byte range in the program text. Synthesized tokens get an empty range
    /// at the point where they were produced.
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self {
            kind,
            text: None,
            span,
        }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            span,
        }
    }

    /// A token with no text occupying no source bytes
    pub fn synthesized(kind: TokenKind, at: usize) -> Self {
        Self::new(kind, at..at)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_not(&self, kind: TokenKind) -> bool {
        !self.is(kind)
    }

    pub fn is_eof(&self) -> bool {
        self.is(TokenKind::Eof)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "<{}:{}>", self.kind, text),
            None => write!(f, "<{}>", self.kind),
        }
    }
}
