//! Test fixtures and data generators

use larder_core::TagId;
use larder_taxonomy::{LocaleEntry, LocalizationStore, TagNode, TaxonomyRegistry};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

fn id(raw: &str) -> TagId {
    match TagId::parse(raw) {
        Ok(id) => id,
        Err(e) => panic!("fixture id {} is malformed: {}", raw, e),
    }
}

fn child(raw: &str, name: &str) -> TagNode {
    let tag = id(raw);
    let parent = tag.structural_parent();
    let mut node = TagNode::new(tag, name);
    node.parent_id = parent;
    node
}

/// Nodes of the fixture taxonomy, parents first
pub fn fixture_nodes() -> Vec<TagNode> {
    vec![
        TagNode::new(id("cuisine.italian"), "Italian")
            .with_popularity(95)
            .with_related([id("mainIngredient.grain.pasta")]),
        child("cuisine.italian.sicilian", "Sicilian").with_popularity(40),
        TagNode::new(id("cuisine.thai"), "Thai").with_popularity(75),
        TagNode::new(id("dietary.vegetarian"), "Vegetarian")
            .with_synonyms(["veggie", "meatless"])
            .with_popularity(85),
        child("dietary.vegetarian.vegan", "Vegan")
            .with_synonyms(["plant-based"])
            .with_popularity(80),
        TagNode::new(id("difficulty.beginner"), "Beginner")
            .with_synonyms(["easy", "simple"])
            .with_popularity(70),
        TagNode::new(id("difficulty.intermediate"), "Intermediate")
            .with_synonyms(["medium"])
            .with_popularity(50),
        TagNode::new(id("difficulty.advanced"), "Advanced")
            .with_synonyms(["hard"])
            .with_popularity(35),
        TagNode::new(id("mainIngredient.grain"), "Grains").with_popularity(50),
        child("mainIngredient.grain.pasta", "Pasta")
            .with_synonyms(["spaghetti"])
            .with_popularity(85),
        TagNode::new(id("mainIngredient.protein"), "Protein").with_popularity(60),
        child("mainIngredient.protein.chicken", "Chicken")
            .with_synonyms(["poultry"])
            .with_popularity(90),
        TagNode::new(id("planning.quick"), "Quick")
            .with_synonyms(["fast", "30 minutes or less"])
            .with_popularity(90),
        TagNode::new(id("course.dessert"), "Dessert")
            .with_synonyms(["sweets"])
            .with_popularity(88),
    ]
}

/// Small deterministic registry covering every tag the scenario tests use
pub fn fixture_registry() -> TaxonomyRegistry {
    match TaxonomyRegistry::from_nodes(fixture_nodes()) {
        Ok(registry) => registry,
        Err(e) => panic!("fixture taxonomy is invalid: {}", e),
    }
}

/// English labels and descriptions plus a few Italian ones; deliberately no French
pub fn fixture_store(registry: &TaxonomyRegistry) -> LocalizationStore {
    let mut store = LocalizationStore::new(registry);
    let entries = [
        LocaleEntry::new(id("cuisine.italian"), "en", "Italian")
            .with_description("Cooking from Italy"),
        LocaleEntry::new(id("cuisine.italian.sicilian"), "en", "Sicilian")
            .with_description("Italian island cooking"),
        LocaleEntry::new(id("cuisine.italian"), "it", "Italiana"),
        LocaleEntry::new(id("difficulty.beginner"), "it", "Facile"),
    ];
    for entry in entries {
        if let Err(e) = store.insert(entry) {
            panic!("fixture locale entry rejected: {}", e);
        }
    }
    store
}

/// Free-text tags as they appear in scraped recipe data
pub fn legacy_tag_corpus() -> Vec<&'static str> {
    vec![
        "Italian",
        "Lidia Bastianich",
        "Easy",
        "Quick",
        "Pasta",
        "plant-based",
        "Vegetarian",
        "Chicken",
        "Dessert",
        "Sicilian",
        "30 minutes or less",
        "Serious Eats",
        "weeknight",
        "cuisine.italian",
        "  spaghetti ",
        "Thai",
        "",
    ]
}

/// `count` random tag lists drawn from [`legacy_tag_corpus`]; same seed, same lists
pub fn generate_tag_lists(count: usize, seed: u64) -> Vec<Vec<String>> {
    let corpus = legacy_tag_corpus();
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..6);
            (0..len)
                .filter_map(|_| corpus.choose(&mut rng).map(|t| t.to_string()))
                .collect()
        })
        .collect()
}

/// JSON recipe records shaped like the scraper output.
///
/// Odd records store `tags` JSON-encoded inside a string, as older ingest
/// jobs did; even records use a plain array.
pub fn legacy_record_values(count: usize, seed: u64) -> Vec<Value> {
    generate_tag_lists(count, seed)
        .into_iter()
        .enumerate()
        .map(|(i, tags)| {
            let tags = if i % 2 == 1 {
                Value::String(serde_json::to_string(&tags).unwrap_or_default())
            } else {
                json!(tags)
            };
            json!({
                "title": format!("Recipe {}", i + 1),
                "source": "scrape",
                "servings": (i % 6) + 1,
                "tags": tags,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_registry_builds() {
        let registry = fixture_registry();
        assert_eq!(registry.len(), fixture_nodes().len());
        assert!(registry.collisions().is_empty());
    }

    #[test]
    fn test_generated_lists_are_deterministic() {
        assert_eq!(generate_tag_lists(20, 7), generate_tag_lists(20, 7));
        assert_eq!(legacy_record_values(4, 1).len(), 4);
        assert!(legacy_record_values(2, 1)[1]["tags"].is_string());
    }
}
