use larder_migrate::{MigrationPlanner, MigrationStrategy};
use larder_taxonomy::{TagId, TaxonomyRegistry};
use larder_test::fixture_registry;
use proptest::prelude::*;
use std::sync::OnceLock;

fn registry() -> &'static TaxonomyRegistry {
    static REGISTRY: OnceLock<TaxonomyRegistry> = OnceLock::new();
    REGISTRY.get_or_init(fixture_registry)
}

fn tag_list() -> impl Strategy<Value = Vec<String>> {
    let known = prop::sample::select(vec![
        "Italian", "easy", "Pasta", "plant-based", "cuisine.thai", "Quick", "Sweets",
    ])
    .prop_map(String::from);
    let noise = "[A-Za-z ]{0,14}";
    proptest::collection::vec(prop_oneof![known, noise], 0..12)
}

proptest! {
    #[test]
    fn new_only_yields_distinct_well_formed_ids(tags in tag_list()) {
        let migrated = MigrationPlanner::new(registry()).migrate(&tags, MigrationStrategy::NewOnly);

        let mut unique = migrated.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), migrated.len());
        for tag in &migrated {
            prop_assert!(TagId::parse(tag).is_ok(), "{} is not a tag id", tag);
        }
    }

    #[test]
    fn legacy_only_is_identity(tags in tag_list()) {
        let migrated = MigrationPlanner::new(registry()).migrate(&tags, MigrationStrategy::LegacyOnly);
        prop_assert_eq!(migrated, tags);
    }

    #[test]
    fn dual_keeps_every_canonical_id(tags in tag_list()) {
        let planner = MigrationPlanner::new(registry());
        let canonical = planner.migrate(&tags, MigrationStrategy::NewOnly);
        let dual = planner.migrate(&tags, MigrationStrategy::Dual);

        for id in &canonical {
            prop_assert!(dual.contains(id));
        }
    }

    #[test]
    fn report_counts_add_up(tags in tag_list()) {
        let report = MigrationPlanner::new(registry()).generate_report(&tags);
        prop_assert_eq!(
            report.mapped_count + report.already_canonical_count + report.fallback_count,
            tags.len()
        );
        prop_assert!(report.fallback_list.len() <= report.fallback_count);
    }
}
