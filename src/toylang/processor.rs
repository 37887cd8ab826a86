//! Processing API for toy language programs
//!
//! A processing spec names the stage to stop at (tokens or AST) and the
//! format to render it in, written as `<stage>-<format>`:
//!
//! - `token-simple`, `token-json`
//! - `ast-tag`, `ast-treeviz`, `ast-json`, `ast-yaml`

use crate::toylang::config::ScannerConfig;
use crate::toylang::error::Error;
use crate::toylang::formats::{serialize_ast_tag, to_treeviz_str};
use crate::toylang::lexer::{scan_with_config, Token, TokenKind};
use crate::toylang::parser::{parse_program_with_config, Program};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

const AVAILABLE_SPECS: &[(&str, ProcessingStage, OutputFormat)] = &[
    ("token-simple", ProcessingStage::Token, OutputFormat::Simple),
    ("token-json", ProcessingStage::Token, OutputFormat::Json),
    ("ast-tag", ProcessingStage::Ast, OutputFormat::Tag),
    ("ast-treeviz", ProcessingStage::Ast, OutputFormat::Treeviz),
    ("ast-json", ProcessingStage::Ast, OutputFormat::Json),
    ("ast-yaml", ProcessingStage::Ast, OutputFormat::Yaml),
];

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-tag"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        if !matches!(stage, "token" | "ast") {
            return Err(ProcessingError::InvalidStage(stage.to_string()));
        }

        AVAILABLE_SPECS
            .iter()
            .find(|(name, _, _)| *name == format_str)
            .map(|(_, stage, format)| ProcessingSpec {
                stage: *stage,
                format: *format,
            })
            .ok_or_else(|| ProcessingError::InvalidFormatType(format!("{} for {}", format, stage)))
    }

    pub fn name(&self) -> &'static str {
        AVAILABLE_SPECS
            .iter()
            .find(|(_, stage, format)| *stage == self.stage && *format == self.format)
            .map(|(name, _, _)| *name)
            .unwrap_or("unknown")
    }
}

/// Errors that can occur during processing
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Source(#[from] Error),
}

/// Process a program according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    process_source_with_config(source, spec, ScannerConfig::default())
}

pub fn process_source_with_config(
    source: &str,
    spec: &ProcessingSpec,
    config: ScannerConfig,
) -> Result<String, ProcessingError> {
    debug!(spec = spec.name(), "processing source");
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = scan_with_config(source, config).map_err(Error::from)?;
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Ast => {
            let program = parse_program_with_config(source, config)?;
            format_program(&program, spec.format)
        }
    }
}

/// Read a file and process it according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: ScannerConfig,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process_source_with_config(&content, spec, config)
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                if token.is(TokenKind::NewLine) {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{:?} only works with the ast stage",
            other
        ))),
    }
}

fn format_program(program: &Program, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Tag => Ok(serialize_ast_tag(program)),
        OutputFormat::Treeviz => Ok(to_treeviz_str(program)),
        OutputFormat::Json => serde_json::to_string_pretty(program)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(program).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
            "simple only works with the token stage".to_string(),
        )),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    AVAILABLE_SPECS
        .iter()
        .map(|(name, _, _)| name.to_string())
        .collect()
}
