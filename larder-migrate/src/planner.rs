//! Legacy tag migration

use larder_core::config::{Config, MigrationConfig, ValidationConfig};
use larder_core::{MatchType, MigrationStrategy, TagId};
use larder_taxonomy::{Normalizer, TaxonomyRegistry};
use rayon::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;

use crate::records::Tagged;
use crate::report::{Mapping, MigrationReport, ValidationReport, ValidationWarning};

/// Converts legacy free-text tag lists to canonical ids.
///
/// Every operation is a pure function of the registry and the planner's
/// settings; nothing is written anywhere.
#[derive(Debug, Clone)]
pub struct MigrationPlanner<'a> {
    registry: &'a TaxonomyRegistry,
    normalizer: Normalizer<'a>,
    migration: MigrationConfig,
    validation: ValidationConfig,
}

impl<'a> MigrationPlanner<'a> {
    pub fn new(registry: &'a TaxonomyRegistry) -> Self {
        Self {
            registry,
            normalizer: Normalizer::new(registry),
            migration: MigrationConfig::default(),
            validation: ValidationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.migration = config.migration.clone();
        self.validation = config.validation.clone();
        self
    }

    /// Strategy from the loaded configuration
    pub fn default_strategy(&self) -> MigrationStrategy {
        self.migration.strategy
    }

    pub fn migrate<S: AsRef<str>>(&self, tags: &[S], strategy: MigrationStrategy) -> Vec<String> {
        match strategy {
            MigrationStrategy::LegacyOnly => tags.iter().map(|t| t.as_ref().to_string()).collect(),
            MigrationStrategy::NewOnly => {
                let ids: Vec<String> = tags
                    .iter()
                    .map(|t| self.canonical(t.as_ref()).into())
                    .collect();
                deduplicate_in_order(&ids)
            }
            MigrationStrategy::Dual => {
                let mut out = Vec::with_capacity(tags.len() * 2);
                for tag in tags {
                    let legacy = tag.as_ref();
                    let canonical: String = self.canonical(legacy).into();
                    let same = canonical == legacy;
                    out.push(canonical);
                    if !same {
                        out.push(legacy.to_string());
                    }
                }
                deduplicate_in_order(&out)
            }
        }
    }

    fn canonical(&self, raw: &str) -> TagId {
        let result = self.normalizer.normalize(raw);
        if result.is_fallback() {
            tracing::warn!(raw = %raw, id = %result.id, "tag did not match the taxonomy");
        }
        result.id
    }

    /// Rewrite each record's tags; other fields are untouched and order is kept.
    ///
    /// Batches at or above the configured threshold run on the rayon pool.
    #[tracing::instrument(skip_all, fields(records = records.len(), strategy = %strategy))]
    pub fn batch_migrate<R>(&self, records: Vec<R>, strategy: MigrationStrategy) -> Vec<R>
    where
        R: Tagged + Send,
    {
        let convert = |mut record: R| {
            let tags = self.migrate(&record.tags(), strategy);
            record.set_tags(tags);
            record
        };

        if records.len() >= self.migration.parallel_threshold {
            tracing::debug!(threshold = self.migration.parallel_threshold, "migrating in parallel");
            records.into_par_iter().map(convert).collect()
        } else {
            records.into_iter().map(convert).collect()
        }
    }

    #[tracing::instrument(skip_all, fields(tags = tags.len()))]
    pub fn generate_report<S: AsRef<str>>(&self, tags: &[S]) -> MigrationReport {
        let mut report = MigrationReport {
            total: tags.len(),
            ..Default::default()
        };
        let mut fallbacks_seen = HashSet::new();
        let mut samples_seen = HashSet::new();

        for tag in tags {
            let raw: &str = tag.as_ref();
            let result = self.normalizer.normalize(raw);
            match result.match_type {
                MatchType::Exact => report.already_canonical_count += 1,
                MatchType::Name | MatchType::Synonym => {
                    report.mapped_count += 1;
                    if report.sample_mappings.len() < self.migration.sample_size
                        && samples_seen.insert((raw.to_string(), result.id.clone()))
                    {
                        report.sample_mappings.push(Mapping {
                            raw: raw.to_string(),
                            id: result.id,
                        });
                    }
                }
                MatchType::Fallback => {
                    report.fallback_count += 1;
                    if fallbacks_seen.insert(raw.to_string()) {
                        report.fallback_list.push(raw.to_string());
                    }
                }
            }
        }

        tracing::debug!(
            mapped = report.mapped_count,
            canonical = report.already_canonical_count,
            fallback = report.fallback_count,
            "migration report generated"
        );
        report
    }

    /// Report over the tags of many records
    pub fn report_records<R: Tagged>(&self, records: &[R]) -> MigrationReport {
        let tags: Vec<String> = records.iter().flat_map(Tagged::tags).collect();
        self.generate_report(&tags)
    }

    pub fn deduplicate(&self, tags: &[TagId]) -> Vec<TagId> {
        deduplicate_in_order(tags)
    }

    /// Check raw tag strings against the registry and the configured rules.
    /// Advisory only; never fails.
    pub fn validate<S: AsRef<str>>(&self, tags: &[S]) -> ValidationReport {
        let mut report = ValidationReport::default();
        let distinct = deduplicate_in_order(
            &tags.iter().map(|t| t.as_ref().trim().to_string()).collect::<Vec<_>>(),
        );

        for raw in &distinct {
            match TagId::parse(raw) {
                Ok(id) if self.registry.contains(&id) => report.valid.push(id),
                _ => report.invalid.push(raw.clone()),
            }
        }

        let count = distinct.len();
        if count < self.validation.min_tags {
            report.warnings.push(ValidationWarning::BelowMinimum {
                count,
                minimum: self.validation.min_tags,
            });
        }
        if count > self.validation.max_tags {
            report.warnings.push(ValidationWarning::ExceedsMaximum {
                count,
                maximum: self.validation.max_tags,
            });
        }
        for category in &self.validation.required_categories {
            if !report.valid.iter().any(|id| id.category() == *category) {
                report.warnings.push(ValidationWarning::MissingCategory { category: *category });
            }
        }

        report
    }
}

/// Drop repeats, keeping the first occurrence of each item
pub fn deduplicate_in_order<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::Category;
    use larder_taxonomy::TagNode;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn id(s: &str) -> TagId {
        TagId::parse(s).unwrap()
    }

    fn registry() -> TaxonomyRegistry {
        TaxonomyRegistry::from_nodes([
            TagNode::new(id("cuisine.italian"), "Italian"),
            TagNode::new(id("difficulty.beginner"), "Beginner").with_synonyms(["easy"]),
            TagNode::new(id("mainIngredient.grain"), "Grains"),
            TagNode::new(id("mainIngredient.grain.pasta"), "Pasta").with_parent(id("mainIngredient.grain")),
            TagNode::new(id("planning.quick"), "Quick"),
        ])
        .unwrap()
    }

    #[rstest]
    #[case(MigrationStrategy::NewOnly, &["cuisine.italian", "difficulty.beginner"])]
    #[case(
        MigrationStrategy::Dual,
        &["cuisine.italian", "Italian", "difficulty.beginner", "easy"]
    )]
    #[case(MigrationStrategy::LegacyOnly, &["Italian", "easy", "Italian"])]
    fn test_migrate_strategies(#[case] strategy: MigrationStrategy, #[case] expected: &[&str]) {
        let registry = registry();
        let planner = MigrationPlanner::new(&registry);
        assert_eq!(planner.migrate(&["Italian", "easy", "Italian"], strategy), expected);
    }

    #[test]
    fn test_dual_skips_identical_legacy_string() {
        let registry = registry();
        let planner = MigrationPlanner::new(&registry);
        assert_eq!(
            planner.migrate(&["cuisine.italian", "Quick"], MigrationStrategy::Dual),
            vec!["cuisine.italian", "planning.quick", "Quick"]
        );
    }

    #[test]
    fn test_batch_migrate_keeps_record_order() {
        let registry = registry();
        let planner = MigrationPlanner::new(&registry);
        let records = vec![
            vec!["italian".to_string(), "easy".to_string(), "pasta".to_string(), "quick".to_string()],
            vec!["Quick".to_string()],
            vec![],
        ];

        let migrated = planner.batch_migrate(records, MigrationStrategy::NewOnly);
        assert_eq!(
            migrated,
            vec![
                vec![
                    "cuisine.italian".to_string(),
                    "difficulty.beginner".to_string(),
                    "mainIngredient.grain.pasta".to_string(),
                    "planning.quick".to_string(),
                ],
                vec!["planning.quick".to_string()],
                vec![],
            ]
        );
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let registry = registry();
        let mut config = Config::default();
        config.migration.parallel_threshold = 2;
        let parallel = MigrationPlanner::new(&registry).with_config(&config);
        config.migration.parallel_threshold = usize::MAX;
        let sequential = MigrationPlanner::new(&registry).with_config(&config);

        let records: Vec<Vec<String>> = (0..50)
            .map(|i| vec![format!("tag {}", i % 7), "easy".to_string(), "Italian".to_string()])
            .collect();

        assert_eq!(
            parallel.batch_migrate(records.clone(), MigrationStrategy::Dual),
            sequential.batch_migrate(records, MigrationStrategy::Dual)
        );
    }

    #[test]
    fn test_generate_report() {
        let registry = registry();
        let mut config = Config::default();
        config.migration.sample_size = 1;
        let planner = MigrationPlanner::new(&registry).with_config(&config);

        let report = planner.generate_report(&[
            "Italian",
            "easy",
            "cuisine.italian",
            "Lidia Bastianich",
            "Lidia Bastianich",
            "",
        ]);

        assert_eq!(report.total, 6);
        assert_eq!(report.mapped_count, 2);
        assert_eq!(report.already_canonical_count, 1);
        assert_eq!(report.fallback_count, 3);
        assert_eq!(report.fallback_list, vec!["Lidia Bastianich", ""]);
        assert_eq!(
            report.sample_mappings,
            vec![Mapping { raw: "Italian".into(), id: id("cuisine.italian") }]
        );
    }

    #[test]
    fn test_deduplicate() {
        let registry = registry();
        let planner = MigrationPlanner::new(&registry);
        let (a, b, c) = (id("cuisine.italian"), id("planning.quick"), id("difficulty.beginner"));

        assert_eq!(
            planner.deduplicate(&[a.clone(), b.clone(), a.clone(), c.clone(), b.clone()]),
            vec![a, b, c]
        );
        assert!(planner.deduplicate(&[]).is_empty());
    }

    #[test]
    fn test_validate_single_tag() {
        let registry = registry();
        let report = MigrationPlanner::new(&registry).validate(&["cuisine.italian"]);

        assert!(report.invalid.is_empty());
        assert!(report.is_valid());
        assert_eq!(report.valid, vec![id("cuisine.italian")]);
        assert!(report
            .warnings
            .contains(&ValidationWarning::BelowMinimum { count: 1, minimum: 2 }));
        assert!(report
            .warnings
            .contains(&ValidationWarning::MissingCategory { category: Category::Difficulty }));
    }

    #[test]
    fn test_validate_invalid_and_excess() {
        let registry = registry();
        let mut config = Config::default();
        config.validation.max_tags = 2;
        let planner = MigrationPlanner::new(&registry).with_config(&config);

        let report = planner.validate(&[
            "cuisine.italian",
            "difficulty.beginner",
            "Italian",
            "cuisine.french",
            "cuisine.italian",
        ]);

        assert_eq!(report.invalid, vec!["Italian", "cuisine.french"]);
        assert_eq!(
            report.warnings,
            vec![ValidationWarning::ExceedsMaximum { count: 4, maximum: 2 }]
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn test_validate_empty() {
        let registry = registry();
        let empty: [&str; 0] = [];
        let report = MigrationPlanner::new(&registry).validate(&empty);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.is_valid());
        assert!(!report.is_clean());
    }
}
