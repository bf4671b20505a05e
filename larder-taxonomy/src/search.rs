//! Ranked tag search

use larder_core::config::SearchConfig;
use larder_core::TagId;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::index::canonical_key;
use crate::localization::LocalizationStore;
use crate::registry::TaxonomyRegistry;

/// Strength of a query match. The discriminant is the band's base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchBand {
    Description = 500,
    NameContains = 600,
    Synonym = 700,
    NamePrefix = 800,
    Name = 900,
    Leaf = 1000,
}

impl MatchBand {
    pub fn base_score(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for MatchBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Description => "description",
            Self::NameContains => "name contains",
            Self::Synonym => "synonym",
            Self::NamePrefix => "name prefix",
            Self::Name => "name",
            Self::Leaf => "leaf",
        })
    }
}

/// A ranked result. `band` is `None` for popularity-only listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTag {
    pub id: TagId,
    pub score: u32,
    pub band: Option<MatchBand>,
}

#[derive(Debug, Clone)]
struct SearchEntry {
    id: TagId,
    name: String,
    name_lower: String,
    name_key: String,
    leaf_key: String,
    synonym_keys: Vec<String>,
    description_lower: Option<String>,
    popularity: u8,
}

impl SearchEntry {
    fn band(&self, query_lower: &str, query_key: &str) -> Option<MatchBand> {
        let keyed = !query_key.is_empty();

        if keyed && self.leaf_key == query_key {
            Some(MatchBand::Leaf)
        } else if self.name_lower == query_lower || (keyed && self.name_key == query_key) {
            Some(MatchBand::Name)
        } else if self.name_lower.starts_with(query_lower) {
            Some(MatchBand::NamePrefix)
        } else if keyed && self.synonym_keys.iter().any(|s| s == query_key) {
            Some(MatchBand::Synonym)
        } else if self.name_lower.contains(query_lower) {
            Some(MatchBand::NameContains)
        } else if self
            .description_lower
            .as_deref()
            .is_some_and(|d| d.contains(query_lower))
        {
            Some(MatchBand::Description)
        } else {
            None
        }
    }

    /// score desc, popularity desc, name asc, id asc
    fn ordering(a: (&Self, u32), b: (&Self, u32)) -> Ordering {
        b.1.cmp(&a.1)
            .then_with(|| b.0.popularity.cmp(&a.0.popularity))
            .then_with(|| a.0.name.cmp(&b.0.name))
            .then_with(|| a.0.id.cmp(&b.0.id))
    }
}

/// Scores tags against a free-text query.
///
/// `score = band + popularity`; only the strongest band counts. Lowercased
/// names, keys and descriptions are computed once at construction.
#[derive(Debug, Clone)]
pub struct SearchRanker {
    entries: Vec<SearchEntry>,
    positions: HashMap<TagId, usize>,
    default_limit: usize,
    max_limit: usize,
}

impl SearchRanker {
    pub fn new(registry: &TaxonomyRegistry) -> Self {
        let config = SearchConfig::default();
        let entries: Vec<SearchEntry> = registry
            .iter()
            .map(|node| SearchEntry {
                id: node.id.clone(),
                name: node.canonical_name.clone(),
                name_lower: node.canonical_name.to_lowercase(),
                name_key: canonical_key(&node.canonical_name),
                leaf_key: canonical_key(node.id.leaf()),
                synonym_keys: node.synonyms.iter().map(|s| canonical_key(s)).collect(),
                description_lower: None,
                popularity: node.popularity,
            })
            .collect();
        let positions = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();

        Self {
            entries,
            positions,
            default_limit: config.default_limit,
            max_limit: config.max_limit,
        }
    }

    /// Use default-locale descriptions from `store` for the description band
    pub fn with_descriptions(mut self, store: &LocalizationStore) -> Self {
        for entry in &mut self.entries {
            entry.description_lower = store
                .get_description(&entry.id, store.default_locale())
                .map(str::to_lowercase);
        }
        self
    }

    pub fn with_config(mut self, config: &SearchConfig) -> Self {
        self.max_limit = config.max_limit;
        self.default_limit = config.default_limit.min(config.max_limit);
        self
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<TagId> {
        into_ids(self.rank(query, limit, None))
    }

    /// Search restricted to `candidates`; unknown candidate ids are ignored
    pub fn search_in(&self, query: &str, limit: usize, candidates: &[TagId]) -> Vec<TagId> {
        into_ids(self.rank(query, limit, Some(candidates)))
    }

    /// Most popular tags, ties broken by name
    pub fn popular(&self, limit: usize) -> Vec<TagId> {
        self.search("", limit)
    }

    pub fn rank(&self, query: &str, limit: usize, candidates: Option<&[TagId]>) -> Vec<ScoredTag> {
        let limit = limit.min(self.max_limit);
        if limit == 0 {
            return Vec::new();
        }

        let pool: Vec<&SearchEntry> = match candidates {
            Some(ids) => {
                let mut seen = HashSet::with_capacity(ids.len());
                ids.iter()
                    .filter(|id| seen.insert(*id))
                    .filter_map(|id| self.positions.get(id).map(|&i| &self.entries[i]))
                    .collect()
            }
            None => self.entries.iter().collect(),
        };

        let query_lower = query.trim().to_lowercase();
        let mut scored: Vec<(&SearchEntry, u32, Option<MatchBand>)> = if query_lower.is_empty() {
            pool.into_iter()
                .map(|e| (e, u32::from(e.popularity), None))
                .collect()
        } else {
            let query_key = canonical_key(&query_lower);
            pool.into_iter()
                .filter_map(|e| {
                    e.band(&query_lower, &query_key)
                        .map(|band| (e, band.base_score() + u32::from(e.popularity), Some(band)))
                })
                .collect()
        };

        scored.sort_by(|a, b| SearchEntry::ordering((a.0, a.1), (b.0, b.1)));
        scored.truncate(limit);

        tracing::trace!(query = %query, results = scored.len(), "ranked search");

        scored
            .into_iter()
            .map(|(e, score, band)| ScoredTag {
                id: e.id.clone(),
                score,
                band,
            })
            .collect()
    }
}

fn into_ids(scored: Vec<ScoredTag>) -> Vec<TagId> {
    scored.into_iter().map(|s| s.id).collect()
}
