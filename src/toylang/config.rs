//! Configuration loading for toylang.
//!
//! `defaults/toylang.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user-specific files on top of
//! those defaults via [`Loader`] before deserializing into [`ToylangConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/toylang.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ToylangConfig {
    pub scanner: ScannerConfig,
    pub output: OutputConfig,
}

/// Knobs consumed by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScannerConfig {
    /// Spaces per indentation level. A width of 0 fails to deserialize.
    pub indent_width: NonZeroUsize,
}

impl ScannerConfig {
    /// Config with `indent_width` spaces per level, or `None` for 0
    pub fn with_indent_width(indent_width: usize) -> Option<Self> {
        NonZeroUsize::new(indent_width).map(|indent_width| Self { indent_width })
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        // Two spaces per level
        Self {
            indent_width: NonZeroUsize::MIN.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Processing format string, e.g. `ast-tag` or `token-json`
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    /// A zero `scanner.indent_width` is rejected here.
    pub fn build(self) -> Result<ToylangConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ToylangConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.scanner, ScannerConfig::default());
        assert_eq!(config.output.format, "ast-tag");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("scanner.indent_width", 4)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.scanner.indent_width.get(), 4);
    }

    #[test]
    fn rejects_zero_indent_width() {
        let result = Loader::new()
            .set_override("scanner.indent_width", 0)
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn zero_width_scanner_config_is_unrepresentable() {
        assert_eq!(ScannerConfig::with_indent_width(0), None);
        assert_eq!(
            ScannerConfig::with_indent_width(2),
            Some(ScannerConfig::default())
        );
        assert_eq!(ScannerConfig::default().indent_width.get(), 2);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "ast-tag");
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new().with_file("does/not/exist.toml").build().is_err());
    }
}
