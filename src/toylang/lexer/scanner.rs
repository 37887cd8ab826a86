//! Pull scanner for the toy language
//!
//! Tokens are produced on demand. The parser either consumes the next token
//! or peeks ahead any fixed number of tokens; peeked tokens are buffered and
//! handed out first by later calls, so lookahead never changes what is
//! consumed.
//!
//! Indentation Handling
//!
//!     At the start of each logical line the scanner measures the run of
//!     leading spaces and turns it into a level (`spaces / indent_width`).
//!     A level one deeper than the previous line yields an OpenBlock token,
//!     one shallower yields a CloseBlock token, and any bigger jump is an
//!     error. The line's content is scanned on the following calls.
//!
//!     Blank lines and comment-only lines are skipped before the
//!     measurement, so they never affect the level and never produce a
//!     second NewLine token. Indentation is spaces only; a tab in the
//!     leading run is an error.
//!
//!     The line end of the last logical line produces no NewLine. When the
//!     input runs out with blocks still open, one CloseBlock is produced per
//!     open level before Eof.

use super::patterns::{is_token_separator, match_token};
use super::tokens::{Token, TokenKind};
use crate::toylang::config::ScannerConfig;
use crate::toylang::error::ScanError;
use crate::toylang::location::{Position, SourceLocation};
use std::cmp::Ordering;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Intra-line whitespace. Newlines are tokens and never skipped here.
const INLINE_WHITESPACE: &[char] = &[' ', '\t', '\r', '\x0c'];

const COMMENT_START: char = '#';

/// Demand-driven scanner over a single program
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScannerConfig,
    /// Program text, always ending with a newline sentinel
    source: String,
    /// Byte offset of the first unconsumed character
    cursor: usize,
    /// Tokens scanned by lookahead but not yet consumed
    lookahead: VecDeque<Token>,
    indent_level: usize,
    at_line_start: bool,
    eof_scanned: bool,
    location: SourceLocation,
}

impl Scanner {
    pub fn new() -> Self {
        Self::with_config(ScannerConfig::default())
    }

    pub fn with_config(config: ScannerConfig) -> Self {
        let mut scanner = Self {
            config,
            source: String::new(),
            cursor: 0,
            lookahead: VecDeque::new(),
            indent_level: 0,
            at_line_start: true,
            eof_scanned: false,
            location: SourceLocation::new(""),
        };
        scanner.set_program("");
        scanner
    }

    /// Reset all state and start scanning `program`
    pub fn set_program(&mut self, program: &str) {
        let mut source = String::with_capacity(program.len() + 1);
        source.push_str(program);
        source.push('\n');

        self.location = SourceLocation::new(&source);
        self.source = source;
        self.cursor = 0;
        self.lookahead.clear();
        self.indent_level = 0;
        self.at_line_start = true;
        self.eof_scanned = false;
    }

    /// Consume and return the next token.
    ///
    /// Buffered lookahead is handed out first. Once Eof has been produced
    /// every further call returns Eof again.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        match self.lookahead.pop_front() {
            Some(token) => Ok(token),
            None => self.scan_token(),
        }
    }

    /// Peek at the n-th unconsumed token (1-indexed) without consuming it.
    ///
    /// `look_ahead(0)` behaves like `look_ahead(1)`. Looking past an Eof
    /// token is an error.
    pub fn look_ahead(&mut self, n: usize) -> Result<&Token, ScanError> {
        let n = n.max(1);
        while self.lookahead.len() < n {
            if self.lookahead.back().is_some_and(Token::is_eof) {
                return Err(ScanError::LookAheadPastEof { requested: n });
            }
            let token = self.scan_token()?;
            self.lookahead.push_back(token);
        }
        Ok(&self.lookahead[n - 1])
    }

    /// Line/column of a token produced by this scanner
    pub fn position_of(&self, token: &Token) -> Position {
        self.location.range_start(&token.span)
    }

    /// Line/column of the next unscanned character
    pub fn position(&self) -> Position {
        self.location.byte_to_position(self.cursor)
    }

    /// Indentation level of the last measured logical line
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn remaining(&self) -> &str {
        &self.source[self.cursor..]
    }

    /// Byte offset just past the program text, before the newline sentinel
    fn end_of_program(&self) -> usize {
        self.source.len().saturating_sub(1)
    }

    fn scan_token(&mut self) -> Result<Token, ScanError> {
        if self.eof_scanned {
            return Ok(Token::synthesized(TokenKind::Eof, self.end_of_program()));
        }

        if self.at_line_start {
            self.skip_blank_lines();

            if self.remaining().is_empty() {
                return Ok(self.end_of_input());
            }
            if let Some(token) = self.indentation_token()? {
                return Ok(token);
            }
            self.at_line_start = false;
        }

        self.skip_inline_whitespace();

        let rest = self.remaining();
        let Some((pattern, len)) = match_token(rest) else {
            let found: String = rest
                .chars()
                .take_while(|c| !c.is_whitespace())
                .collect();
            return Err(ScanError::UnrecognizedToken {
                found,
                position: self.position(),
            });
        };

        let lexeme = &rest[..len];
        let kind = pattern.classify(lexeme);

        if pattern.requires_separator {
            let next = rest[len..].chars().next();
            if let Some(found) = next.filter(|_| !is_token_separator(next)) {
                return Err(ScanError::MissingSeparator {
                    kind,
                    found,
                    position: self.location.byte_to_position(self.cursor + len),
                });
            }
        }

        let span = self.cursor..self.cursor + len;
        let token = if pattern.keeps_text() {
            Token::with_text(kind, lexeme, span)
        } else {
            Token::new(kind, span)
        };
        self.cursor += len;

        match kind {
            TokenKind::NewLine => {
                self.at_line_start = true;
                self.skip_blank_lines();
                // The last line end separates nothing
                if self.remaining().is_empty() {
                    return Ok(self.end_of_input());
                }
            }
            TokenKind::Eof => self.eof_scanned = true,
            _ => {}
        }

        trace!(token = %token, "scanned token");
        Ok(token)
    }

    /// Skip lines holding only whitespace and an optional comment
    fn skip_blank_lines(&mut self) {
        loop {
            let rest = self.remaining();
            let line_end = rest.find('\n');
            let line = &rest[..line_end.unwrap_or(rest.len())];
            let content = line.trim_start_matches(INLINE_WHITESPACE);

            if !content.is_empty() && !content.starts_with(COMMENT_START) {
                return;
            }

            match line_end {
                Some(end) => self.cursor += end + 1,
                None => {
                    self.cursor = self.source.len();
                    return;
                }
            }
        }
    }

    /// Compare the current line's indentation with the recorded level and
    /// synthesize a block token when it changed
    fn indentation_token(&mut self) -> Result<Option<Token>, ScanError> {
        let spaces = self
            .remaining()
            .chars()
            .take_while(|c| *c == ' ')
            .count();
        if self.remaining()[spaces..].starts_with('\t') {
            return Err(ScanError::TabIndentation {
                position: self.location.byte_to_position(self.cursor + spaces),
            });
        }
        let level = spaces / self.config.indent_width.get();

        match level.cmp(&self.indent_level) {
            Ordering::Equal => Ok(None),
            Ordering::Greater if level == self.indent_level + 1 => {
                self.indent_level = level;
                debug!(level, "open block");
                Ok(Some(Token::synthesized(
                    TokenKind::OpenBlock,
                    self.cursor + spaces,
                )))
            }
            Ordering::Less if level + 1 == self.indent_level => {
                Ok(Some(self.close_block(self.cursor)))
            }
            _ => Err(ScanError::MalformedIndentation {
                from: self.indent_level,
                to: level,
                position: self.position(),
            }),
        }
    }

    fn close_block(&mut self, at: usize) -> Token {
        self.indent_level -= 1;
        debug!(level = self.indent_level, "close block");
        Token::synthesized(TokenKind::CloseBlock, at)
    }

    /// Unwind one open block per call, then produce Eof
    fn end_of_input(&mut self) -> Token {
        let at = self.end_of_program();
        if self.indent_level > 0 {
            return self.close_block(at);
        }
        self.eof_scanned = true;
        trace!("scanned eof");
        Token::synthesized(TokenKind::Eof, at)
    }

    /// Skip spaces, tabs and a trailing comment, stopping at the newline
    fn skip_inline_whitespace(&mut self) {
        let rest = self.remaining();
        let mut skipped = rest.len() - rest.trim_start_matches(INLINE_WHITESPACE).len();

        if rest[skipped..].starts_with(COMMENT_START) {
            skipped += rest[skipped..].find('\n').unwrap_or(rest.len() - skipped);
        }

        self.cursor += skipped;
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
