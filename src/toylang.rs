//! Main module for toylang library functionality

pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod location;
pub mod parser;
pub mod processor;
pub mod testing;

pub use error::{Error, ParseError, Result, ScanError};
