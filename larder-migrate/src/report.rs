//! Migration and validation reports

use larder_core::{Category, TagId};
use serde::Serialize;
use std::fmt;

/// One raw tag and the canonical id it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    pub raw: String,
    pub id: TagId,
}

/// Dry-run summary of how a set of legacy tags would normalize
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    /// Number of input tags, repeats included
    pub total: usize,
    /// Resolved through a name or synonym
    pub mapped_count: usize,
    /// Input already spelled a registered id
    pub already_canonical_count: usize,
    /// Nothing matched; would land in `other.*`
    pub fallback_count: usize,
    /// Distinct raw strings that fell back, first-seen order
    pub fallback_list: Vec<String>,
    /// First few distinct mapped pairs, for review
    pub sample_mappings: Vec<Mapping>,
}

impl MigrationReport {
    /// Share of tags that resolved to a registered id, 0.0 to 1.0
    pub fn resolution_rate(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.mapped_count + self.already_canonical_count) as f64 / self.total as f64
    }
}

/// Advisory issue found by `validate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationWarning {
    BelowMinimum { count: usize, minimum: usize },
    ExceedsMaximum { count: usize, maximum: usize },
    MissingCategory { category: Category },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum { minimum, .. } => {
                write!(f, "below minimum recommended count ({})", minimum)
            }
            Self::ExceedsMaximum { maximum, .. } => write!(f, "exceeds maximum ({})", maximum),
            Self::MissingCategory { category } => {
                write!(f, "missing required category: {}", category)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: Vec<TagId>,
    pub invalid: Vec<String>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// No invalid tags; warnings do not count
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty() && self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let below = ValidationWarning::BelowMinimum { count: 1, minimum: 2 };
        assert_eq!(below.to_string(), "below minimum recommended count (2)");

        let above = ValidationWarning::ExceedsMaximum { count: 9, maximum: 8 };
        assert_eq!(above.to_string(), "exceeds maximum (8)");

        let missing = ValidationWarning::MissingCategory { category: Category::Difficulty };
        assert_eq!(missing.to_string(), "missing required category: difficulty");
    }

    #[test]
    fn test_warning_json_shape() {
        let json = serde_json::to_value(ValidationWarning::MissingCategory {
            category: Category::MainIngredient,
        })
        .unwrap();
        assert_eq!(json["kind"], "missingCategory");
        assert_eq!(json["category"], "mainIngredient");
    }

    #[test]
    fn test_resolution_rate() {
        let report = MigrationReport {
            total: 4,
            mapped_count: 2,
            already_canonical_count: 1,
            fallback_count: 1,
            ..Default::default()
        };
        assert!((report.resolution_rate() - 0.75).abs() < f64::EPSILON);
        assert_eq!(MigrationReport::default().resolution_rate(), 1.0);
    }
}
