/// Core types shared across all Larder modules
pub mod category;
pub mod format;
pub mod matching;
pub mod strategy;
pub mod tag;

// Re-export commonly used types at module level
pub use category::Category;
pub use format::OutputFormat;
pub use matching::{MatchType, NormalizationResult};
pub use strategy::MigrationStrategy;
pub use tag::{slugify, TagId, MAX_SEGMENTS, UNKNOWN_LEAF};
