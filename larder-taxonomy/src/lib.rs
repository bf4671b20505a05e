//! Recipe tag taxonomy: registry, normalization, hierarchy, search and localization

mod data;
pub mod hierarchy;
pub mod index;
pub mod localization;
pub mod node;
pub mod normalizer;
pub mod registry;
pub mod search;

pub use hierarchy::{HierarchyResolver, MAX_TRAVERSAL_DEPTH};
pub use index::{canonical_key, Collision, IndexKind};
pub use localization::{humanize, LocaleEntry, LocaleFile, LocalizationStore, DEFAULT_LOCALE};
pub use node::{TagNode, MAX_POPULARITY};
pub use normalizer::Normalizer;
pub use registry::{TaxonomyBuilder, TaxonomyRegistry, MAX_DEPTH};
pub use search::{MatchBand, ScoredTag, SearchRanker};

// Re-export the shared vocabulary so callers need only this crate
pub use larder_core::{Category, MatchType, NormalizationResult, TagId, TaxonomyError};
