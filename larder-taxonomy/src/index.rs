//! Lookup indices built when a registry is finalized

use indexmap::IndexMap;
use larder_core::types::slugify;
use larder_core::TagId;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::node::TagNode;

/// Which index a collision happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Name,
    Synonym,
    Leaf,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Synonym => "synonym",
            Self::Leaf => "leaf",
        })
    }
}

/// Two nodes claimed the same lookup key; the earlier registration won
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collision {
    pub kind: IndexKind,
    pub key: String,
    pub kept: TagId,
    pub ignored: TagId,
}

/// Canonical lookup key: lowercase, punctuation and whitespace runs collapsed to `-`
pub fn canonical_key(raw: &str) -> String {
    slugify(raw)
}

#[derive(Debug, Default, Clone)]
pub(crate) struct TagIndex {
    pub ids: HashMap<String, TagId>,
    pub names: HashMap<String, TagId>,
    pub synonyms: HashMap<String, TagId>,
    pub leaves: HashMap<String, TagId>,
}

impl TagIndex {
    /// Build all indices in registration order, recording first-wins collisions
    pub fn build(nodes: &IndexMap<TagId, TagNode>) -> (Self, Vec<Collision>) {
        let mut index = Self::default();
        let mut collisions = Vec::new();

        for node in nodes.values() {
            index
                .ids
                .entry(node.id.as_str().to_lowercase())
                .or_insert_with(|| node.id.clone());

            insert_first(
                &mut index.names,
                IndexKind::Name,
                canonical_key(&node.canonical_name),
                &node.id,
                &mut collisions,
            );
            for synonym in &node.synonyms {
                insert_first(
                    &mut index.synonyms,
                    IndexKind::Synonym,
                    canonical_key(synonym),
                    &node.id,
                    &mut collisions,
                );
            }
            insert_first(
                &mut index.leaves,
                IndexKind::Leaf,
                canonical_key(node.id.leaf()),
                &node.id,
                &mut collisions,
            );
        }

        for collision in &collisions {
            tracing::warn!(
                kind = %collision.kind,
                key = %collision.key,
                kept = %collision.kept,
                ignored = %collision.ignored,
                "lookup key collision"
            );
        }

        (index, collisions)
    }
}

fn insert_first(
    map: &mut HashMap<String, TagId>,
    kind: IndexKind,
    key: String,
    id: &TagId,
    collisions: &mut Vec<Collision>,
) {
    if key.is_empty() {
        return;
    }
    match map.get(&key) {
        // a node repeating its own key is not a collision
        Some(existing) if existing == id => {}
        Some(existing) => collisions.push(Collision {
            kind,
            key,
            kept: existing.clone(),
            ignored: id.clone(),
        }),
        None => {
            map.insert(key, id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(id: &str, name: &str, synonyms: &[&str]) -> (TagId, TagNode) {
        let id = TagId::parse(id).unwrap();
        let node = TagNode::new(id.clone(), name).with_synonyms(synonyms.iter().copied());
        (id, node)
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("  Gluten   Free "), "gluten-free");
        assert_eq!(canonical_key("Plant-Based"), "plant-based");
        assert_eq!(canonical_key("glutenFree"), "glutenfree");
        assert_eq!(canonical_key("?!"), "");
    }

    #[test]
    fn test_first_registration_wins() {
        let nodes: IndexMap<TagId, TagNode> = [
            node("difficulty.beginner", "Beginner", &["easy", "Easy"]),
            node("planning.simple", "Simple", &["easy"]),
        ]
        .into_iter()
        .collect();

        let (index, collisions) = TagIndex::build(&nodes);

        assert_eq!(index.synonyms["easy"].as_str(), "difficulty.beginner");
        assert_eq!(
            collisions,
            vec![Collision {
                kind: IndexKind::Synonym,
                key: "easy".to_string(),
                kept: TagId::parse("difficulty.beginner").unwrap(),
                ignored: TagId::parse("planning.simple").unwrap(),
            }]
        );
    }

    #[test]
    fn test_leaf_and_id_keys() {
        let nodes: IndexMap<TagId, TagNode> =
            [node("mainIngredient.protein", "Protein", &[])].into_iter().collect();
        let (index, _) = TagIndex::build(&nodes);

        assert!(index.ids.contains_key("mainingredient.protein"));
        assert!(index.leaves.contains_key("protein"));
        assert!(index.names.contains_key("protein"));
    }
}
