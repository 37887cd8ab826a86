//! Lexer module for the toy language
//!
//! This module contains the token definitions, the ordered pattern table and
//! the pull scanner that the parser drives.
//!
//! The scanner does all of its work lazily: the parser asks for one token at
//! a time, or peeks ahead, and indentation changes are turned into
//! OpenBlock/CloseBlock tokens as the lines are reached. See
//! [scanner](scanner) for the indentation rules.

pub mod patterns;
pub mod scanner;
pub mod tokens;

pub use patterns::{TokenPattern, TOKEN_PATTERNS};
pub use scanner::Scanner;
pub use tokens::{Token, TokenKind};

use crate::toylang::config::ScannerConfig;
use crate::toylang::error::ScanError;

/// Scan a whole program, returning every token up to and including Eof
pub fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    scan_with_config(source, ScannerConfig::default())
}

pub fn scan_with_config(source: &str, config: ScannerConfig) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::with_config(config);
    scanner.set_program(source);

    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
