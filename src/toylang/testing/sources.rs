//! Sample sources for tests
//!
//! The samples under `docs/samples/` are the canonical programs for parser
//! tests. Access them through [`ToySources`] rather than reading paths
//! directly so that unknown names fail loudly.

use std::fs;
use std::path::PathBuf;

/// Available sample files (canonical sources)
pub const AVAILABLE_SAMPLES: &[&str] = &[
    "000-function-calls.toy",
    "010-returns.toy",
    "020-conditionals.toy",
    "030-function-definitions.toy",
    "040-comments-and-blank-lines.toy",
];

pub struct ToySources;

impl ToySources {
    fn sample_path(filename: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("docs")
            .join("samples")
            .join(filename)
    }

    /// Raw content of a sample
    pub fn get_string(filename: &str) -> std::io::Result<String> {
        if !AVAILABLE_SAMPLES.contains(&filename) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                ),
            ));
        }
        fs::read_to_string(Self::sample_path(filename))
    }

    pub fn list_samples() -> Vec<&'static str> {
        AVAILABLE_SAMPLES.to_vec()
    }
}
