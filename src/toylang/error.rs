//! Error types for the scanner and parser
//!
//! Scanner and parser failures are distinct kinds and both abandon the
//! current parse. No error carries recovery information.

use crate::toylang::lexer::TokenKind;
use crate::toylang::location::Position;
use thiserror::Error;

/// Errors raised while turning text into tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// No token pattern matches the text at this point
    #[error("unrecognized token at {position}: {found:?}")]
    UnrecognizedToken { found: String, position: Position },

    /// Indentation changed by more than one level between logical lines
    #[error("malformed indentation at {position}: level {from} to level {to}")]
    MalformedIndentation {
        from: usize,
        to: usize,
        position: Position,
    },

    #[error("tab in indentation at {position}: indent with spaces")]
    TabIndentation { position: Position },

    /// An identifier or number runs straight into a non-separator character
    #[error("missing separator after {kind} at {position}: found {found:?}")]
    MissingSeparator {
        kind: TokenKind,
        found: char,
        position: Position,
    },

    /// Lookahead requested beyond an already scanned end of input
    #[error("cannot look ahead {requested} tokens: end of input reached")]
    LookAheadPastEof { requested: usize },
}

/// Errors raised by a grammar rule after it committed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} at {position}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        position: Position,
    },

    #[error("expected a statement at {position}, found {found}")]
    NoStatement { found: TokenKind, position: Position },

    /// An operator or separator with nothing after it
    #[error("missing operand after '{operator}' at {position}")]
    MissingOperand {
        operator: &'static str,
        position: Position,
    },
}

/// Any failure of the front end
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("scanner error: {0}")]
    Scan(#[from] ScanError),

    #[error("parser error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn is_scan_error(&self) -> bool {
        matches!(self, Error::Scan(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
