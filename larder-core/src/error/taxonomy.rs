//! Taxonomy construction and query errors

use crate::types::TagId;
use thiserror::Error;

/// Errors raised while building or querying a taxonomy registry.
///
/// `DuplicateId`, `InvalidHierarchy` and `RegistryIntegrity` come from the
/// static taxonomy definitions and should abort startup. `NotFound` and
/// `CycleDetected` are query-time errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("duplicate tag id: {id}")]
    DuplicateId { id: TagId },

    #[error("invalid hierarchy for {id}: {reason}")]
    InvalidHierarchy { id: TagId, reason: String },

    #[error("registry integrity violation: {id} references unknown related tag {missing}")]
    RegistryIntegrity { id: TagId, missing: TagId },

    #[error("tag not found: {id}")]
    NotFound { id: TagId },

    #[error("cycle detected while traversing from {id} (depth {depth})")]
    CycleDetected { id: TagId, depth: usize },

    #[error("invalid tag id '{raw}': {reason}")]
    InvalidTagId { raw: String, reason: String },
}

impl TaxonomyError {
    /// True for errors that indicate defective taxonomy data rather than a bad query
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId { .. } | Self::InvalidHierarchy { .. } | Self::RegistryIntegrity { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TagId {
        TagId::parse(s).unwrap()
    }

    #[test]
    fn test_display_messages() {
        let err = TaxonomyError::DuplicateId { id: id("cuisine.italian") };
        assert_eq!(err.to_string(), "duplicate tag id: cuisine.italian");

        let err = TaxonomyError::RegistryIntegrity {
            id: id("cuisine.italian"),
            missing: id("cuisine.french"),
        };
        assert_eq!(
            err.to_string(),
            "registry integrity violation: cuisine.italian references unknown related tag cuisine.french"
        );

        let err = TaxonomyError::CycleDetected { id: id("course.main"), depth: 6 };
        assert!(err.to_string().contains("depth 6"));
    }

    #[test]
    fn test_construction_classification() {
        assert!(TaxonomyError::DuplicateId { id: id("season.summer") }.is_construction_error());
        assert!(!TaxonomyError::NotFound { id: id("season.summer") }.is_construction_error());
    }
}
