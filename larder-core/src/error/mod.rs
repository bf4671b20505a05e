//! Core error types for Larder

pub mod taxonomy;

use thiserror::Error;
pub use taxonomy::TaxonomyError;

/// Main error type for Larder operations
#[derive(Error, Debug)]
pub enum LarderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for Larder operations
pub type LarderResult<T> = Result<T, LarderError>;

// Conversion implementations for common error types
impl From<serde_json::Error> for LarderError {
    fn from(err: serde_json::Error) -> Self {
        LarderError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LarderError {
    fn from(err: toml::de::Error) -> Self {
        LarderError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for LarderError {
    fn from(err: anyhow::Error) -> Self {
        LarderError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TagId;
    use std::io;

    #[test]
    fn test_error_display() {
        let io_error = LarderError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(format!("{}", io_error).contains("IO error"));

        let ser_error = LarderError::Serialization("invalid JSON".to_string());
        assert_eq!(format!("{}", ser_error), "Serialization error: invalid JSON");

        let config_error = LarderError::Configuration("missing field".to_string());
        assert_eq!(format!("{}", config_error), "Configuration error: missing field");

        let input_error = LarderError::InvalidInput("empty record".to_string());
        assert_eq!(format!("{}", input_error), "Invalid input: empty record");

        let not_found = LarderError::NotFound("locale file".to_string());
        assert_eq!(format!("{}", not_found), "Not found: locale file");

        let other = LarderError::Other("unknown".to_string());
        assert_eq!(format!("{}", other), "Other error: unknown");
    }

    #[test]
    fn test_taxonomy_error_conversion() {
        let id = TagId::parse("cuisine.italian").unwrap();
        let err: LarderError = TaxonomyError::DuplicateId { id }.into();

        match err {
            LarderError::Taxonomy(TaxonomyError::DuplicateId { id }) => {
                assert_eq!(id.as_str(), "cuisine.italian");
            }
            other => panic!("Expected Taxonomy error variant, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse_result: Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("{invalid json}");

        let larder_err: LarderError = parse_result.unwrap_err().into();
        match larder_err {
            LarderError::Serialization(msg) => assert!(msg.contains("key must be a string")),
            _ => panic!("Expected Serialization error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let larder_err: LarderError = anyhow::anyhow!("custom error message").into();

        match larder_err {
            LarderError::Other(msg) => assert_eq!(msg, "custom error message"),
            _ => panic!("Expected Other error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let larder_err: LarderError = io_err.into();

        match larder_err {
            LarderError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io error variant"),
        }
    }
}
