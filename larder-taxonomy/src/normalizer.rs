//! Free-text tag normalization

use larder_core::{MatchType, NormalizationResult, TagId};
use std::collections::HashSet;

use crate::index::canonical_key;
use crate::registry::TaxonomyRegistry;

/// Maps arbitrary tag strings onto canonical tag ids.
///
/// Lookup order, first hit wins:
/// 1. full tag id, case-insensitive (`Exact`)
/// 2. canonical name (`Name`)
/// 3. synonym (`Synonym`)
/// 4. id leaf, e.g. `"sicilian"` (`Exact`)
/// 5. `other.<slug>` (`Fallback`)
///
/// Strings that already are `other.*` ids pass through unchanged, so
/// normalizing a normalized list is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    registry: &'a TaxonomyRegistry,
}

impl<'a> Normalizer<'a> {
    pub fn new(registry: &'a TaxonomyRegistry) -> Self {
        Self { registry }
    }

    pub fn normalize(&self, raw: &str) -> NormalizationResult {
        let trimmed = raw.trim();
        let index = &self.registry.index;

        if let Some(id) = index.ids.get(&trimmed.to_lowercase()) {
            return NormalizationResult::new(id.clone(), MatchType::Exact);
        }
        if let Ok(id) = TagId::parse(trimmed) {
            if id.is_fallback() {
                return NormalizationResult::new(id, MatchType::Fallback);
            }
        }

        let key = canonical_key(trimmed);
        if !key.is_empty() {
            if let Some(id) = index.names.get(&key) {
                return NormalizationResult::new(id.clone(), MatchType::Name);
            }
            if let Some(id) = index.synonyms.get(&key) {
                return NormalizationResult::new(id.clone(), MatchType::Synonym);
            }
            if let Some(id) = index.leaves.get(&key) {
                return NormalizationResult::new(id.clone(), MatchType::Exact);
            }
        }

        let result = NormalizationResult::new(TagId::fallback(trimmed), MatchType::Fallback);
        tracing::trace!(raw = %raw, id = %result.id, "no match, using fallback");
        result
    }

    /// Normalize each tag, dropping repeated ids while keeping first-seen order
    pub fn batch_normalize<S: AsRef<str>>(&self, tags: &[S]) -> Vec<TagId> {
        let mut seen = HashSet::with_capacity(tags.len());
        tags.iter()
            .map(|t| self.normalize(t.as_ref()).id)
            .filter(|id| seen.insert(id.clone()))
            .collect()
    }

    /// Normalize each tag without deduplication
    pub fn normalize_all<S: AsRef<str>>(&self, tags: &[S]) -> Vec<NormalizationResult> {
        tags.iter().map(|t| self.normalize(t.as_ref())).collect()
    }
}
