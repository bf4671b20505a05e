/// Canonical tag identifiers
use crate::error::TaxonomyError;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of dot-separated segments in a tag id
pub const MAX_SEGMENTS: usize = 3;

/// Leaf used when a fallback slug would otherwise be empty
pub const UNKNOWN_LEAF: &str = "unknown";

/// Canonical, dot-delimited tag identifier such as `cuisine.italian.sicilian`.
///
/// A `TagId` can only be obtained through [`TagId::parse`] (or the fallback
/// constructor), so every value satisfies the wire format: two or three
/// segments, the first one a [`Category`] token, no empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagId(String);

impl TagId {
    /// Parse and validate a tag id
    pub fn parse(raw: &str) -> Result<Self, TaxonomyError> {
        let invalid = |reason: &str| TaxonomyError::InvalidTagId {
            raw: raw.to_string(),
            reason: reason.to_string(),
        };

        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() < 2 {
            return Err(invalid("expected at least two segments"));
        }
        if segments.len() > MAX_SEGMENTS {
            return Err(invalid("more than three segments"));
        }
        if Category::from_token(segments[0]).is_none() {
            return Err(invalid("first segment is not a category"));
        }

        for segment in &segments[1..] {
            if !is_valid_segment(segment) {
                return Err(invalid("segments must be non-empty lowercase-initial alphanumeric tokens"));
            }
        }

        Ok(Self(raw.to_string()))
    }

    /// Build the `other.<slug>` id used when free text matches nothing
    pub fn fallback(raw: &str) -> Self {
        let slug = slugify(raw);
        let leaf = if slug.is_empty() { UNKNOWN_LEAF.to_string() } else { slug };
        Self(format!("{}.{}", Category::Other.as_str(), leaf))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Category named by the first segment
    pub fn category(&self) -> Category {
        self.segments()
            .next()
            .and_then(Category::from_token)
            .unwrap_or(Category::Other)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Number of segments (2 for roots, 3 for children)
    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// Final segment
    pub fn leaf(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// The id with its last segment removed, when that still names a tag
    pub fn structural_parent(&self) -> Option<TagId> {
        if self.segment_count() <= 2 {
            return None;
        }
        self.0.rsplit_once('.').map(|(head, _)| TagId(head.to_string()))
    }

    /// True for ids synthesized by [`TagId::fallback`] or otherwise in the `other` bucket
    pub fn is_fallback(&self) -> bool {
        self.category() == Category::Other
    }
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_alphanumeric() || first.is_ascii_uppercase() {
        return false;
    }
    if segment.ends_with('-') || segment.contains("--") {
        return false;
    }
    segment.chars().all(|c| c.is_alphanumeric() || c == '-')
}

/// Lowercase `raw` and collapse every run of non-alphanumeric characters to one `-`.
///
/// Leading and trailing separators are dropped, so the result is empty when
/// `raw` has no alphanumeric characters at all.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for c in raw.chars() {
        let lowered: Vec<char> = if c.is_alphanumeric() {
            c.to_lowercase().filter(|l| l.is_alphanumeric()).collect()
        } else {
            Vec::new()
        };

        if lowered.is_empty() {
            pending_separator = true;
            continue;
        }
        if pending_separator && !slug.is_empty() {
            slug.push('-');
        }
        pending_separator = false;
        slug.extend(lowered);
    }

    slug
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TagId {
    type Error = TaxonomyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TagId::parse(&value)
    }
}

impl From<TagId> for String {
    fn from(id: TagId) -> Self {
        id.0
    }
}

impl std::str::FromStr for TagId {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagId::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_valid_ids() {
        for raw in [
            "cuisine.italian",
            "cuisine.italian.sicilian",
            "mainIngredient.protein.chicken",
            "difficulty.beginner",
            "other.xyz-nonsense-123",
        ] {
            let id = TagId::parse(raw).unwrap();
            assert_eq!(id.as_str(), raw);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for raw in [
            "",
            "italian",
            "cuisine.",
            "cuisine..italian",
            "Cuisine.italian",
            "dessert.cake",
            "cuisine.Italian",
            "cuisine.italian.sicilian.palermo",
            "cuisine.ital ian",
        ] {
            assert!(TagId::parse(raw).is_err(), "expected '{}' to be rejected", raw);
        }
    }

    #[test]
    fn test_accessors() {
        let id = TagId::parse("mainIngredient.protein.chicken").unwrap();
        assert_eq!(id.category(), Category::MainIngredient);
        assert_eq!(id.leaf(), "chicken");
        assert_eq!(id.segment_count(), 3);
        assert_eq!(id.structural_parent().unwrap().as_str(), "mainIngredient.protein");
        assert!(TagId::parse("cuisine.italian").unwrap().structural_parent().is_none());
    }

    #[test]
    fn test_fallback_ids() {
        assert_eq!(TagId::fallback("xyz-nonsense-123").as_str(), "other.xyz-nonsense-123");
        assert_eq!(TagId::fallback("  Lidia   Bastianich ").as_str(), "other.lidia-bastianich");
        assert_eq!(TagId::fallback("!!!").as_str(), "other.unknown");
        assert_eq!(TagId::fallback("").as_str(), "other.unknown");
        assert!(TagId::fallback("anything").is_fallback());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Gluten_Free"), "gluten-free");
        assert_eq!(slugify("--a--b--"), "a-b");
        assert_eq!(slugify("Crème Brûlée"), "crème-brûlée");
    }

    #[test]
    fn test_serde_validates() {
        let id: TagId = serde_json::from_str("\"season.summer\"").unwrap();
        assert_eq!(id.category(), Category::Season);
        assert!(serde_json::from_str::<TagId>("\"summer\"").is_err());
    }

    proptest! {
        #[test]
        fn fallback_is_always_well_formed(raw in "\\PC*") {
            let id = TagId::fallback(&raw);
            prop_assert!(TagId::parse(id.as_str()).is_ok(), "malformed fallback {}", id);
        }
    }
}
