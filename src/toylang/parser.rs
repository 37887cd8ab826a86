//! Parser module for the toy language
//!
//! This module contains the AST definitions and the recursive-descent parser.
//! The parser pulls tokens from its own [`Scanner`](crate::toylang::lexer::Scanner);
//! each parse owns one scanner and nothing is shared between parses.
//!
//! ## Testing
//!
//! See the [testing module](crate::toylang::testing) for the fluent AST
//! assertions and the curated sample programs.

pub mod ast;
#[allow(clippy::module_inception)]
pub mod parser;

pub use ast::{BinaryOperator, FunctionHeader, Node, Program};
pub use parser::{Parser, Probe};

use crate::toylang::config::ScannerConfig;
use crate::toylang::error::Result;

/// Main parser function that takes source text and returns the parsed program.
/// This is the primary entry point for parsing toy language programs.
pub fn parse_program(source: &str) -> Result<Program> {
    parse_program_with_config(source, ScannerConfig::default())
}

pub fn parse_program_with_config(source: &str, config: ScannerConfig) -> Result<Program> {
    let mut parser = Parser::with_config(config);
    parser.set_program(source);
    parser.program()
}
