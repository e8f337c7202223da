//! Error types for JSON/YAML conversion.

use thiserror::Error;

/// Errors that can occur during conversion.
///
/// The emitter itself is total over any parsed JSON value; the only failure
/// points are the two parsing boundaries.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input string was not valid JSON (forward path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The input string was not valid YAML (reverse path).
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Convenience alias used throughout yamlify-core.
pub type Result<T> = std::result::Result<T, ConvertError>;
