// Central Error Type for Manifest Evaluation

use thiserror::Error;

/// Configuration error raised while evaluating a project manifest.
///
/// Evaluation runs once per invocation; nothing here is caught or retried.
/// A failure aborts the whole run.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("version tuple must have exactly 3 components, got {found}")]
    InvalidVersionTuple { found: usize },

    #[error("unknown version reference `{reference}` in entry `{entry}`")]
    UnknownVersionRef { entry: String, reference: String },
}

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;
