//! Error types for the segmenter.
//!
//! Segmentation itself is total and never fails. `SegmenterError` covers the
//! layers around the engine: configuration, persistence records, output
//! rendering and the command-line interface.

use thiserror::Error;

/// Main error type for the segmenter library.
#[derive(Debug, Error)]
pub enum SegmenterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Malformed `key=value` record parameter.
    #[error("Invalid parameter '{0}'. Expected key=value (e.g., age=29)")]
    InvalidParam(String),

    /// Invalid configuration value.
    #[error("Invalid configuration for {key}: '{value}'")]
    InvalidConfig { key: String, value: String },

    /// Unknown output format.
    #[error("Invalid output format: '{0}'. Expected text, json or yaml")]
    InvalidFormat(String),

    /// Unknown section label.
    #[error("Invalid section label: '{0}'. Expected health, nutrition, activity or fetalDevelopment")]
    InvalidLabel(String),
}

/// Result type alias for segmenter operations.
pub type Result<T> = std::result::Result<T, SegmenterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SegmenterError::InvalidParam("age".to_string());
        assert!(err.to_string().contains("'age'"));
        assert!(err.to_string().contains("key=value"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = SegmenterError::InvalidConfig {
            key: "SEGMENTER_WRAP_WIDTH".to_string(),
            value: "wide".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration for SEGMENTER_WRAP_WIDTH: 'wide'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: SegmenterError = io.into();
        assert!(matches!(err, SegmenterError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }
}
