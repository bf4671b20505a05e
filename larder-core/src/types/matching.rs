/// Normalization outcome types
use crate::types::TagId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a free-text tag was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Input spelled a registered tag id (or its leaf)
    Exact,
    /// Input equals a tag's canonical name
    Name,
    /// Input equals a registered synonym
    Synonym,
    /// Nothing matched; an `other.*` id was synthesized
    Fallback,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Name => "name",
            Self::Synonym => "synonym",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of normalizing one free-text tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResult {
    pub id: TagId,
    pub match_type: MatchType,
}

impl NormalizationResult {
    pub fn new(id: TagId, match_type: MatchType) -> Self {
        Self { id, match_type }
    }

    /// True when nothing in the taxonomy matched
    pub fn is_fallback(&self) -> bool {
        self.match_type == MatchType::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_camel_case() {
        let result = NormalizationResult::new(
            TagId::parse("cuisine.italian").unwrap(),
            MatchType::Name,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["id"], "cuisine.italian");
        assert_eq!(json["matchType"], "name");
    }

    #[test]
    fn test_fallback_flag() {
        let result = NormalizationResult::new(TagId::fallback("zzz"), MatchType::Fallback);
        assert!(result.is_fallback());
    }
}
