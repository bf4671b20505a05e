//! Tag registry: construction, validation and lookup

use indexmap::IndexMap;
use larder_core::{Category, TagId, TaxonomyError};
use std::collections::HashMap;

use crate::index::{Collision, TagIndex};
use crate::node::TagNode;

/// Deepest allowed hierarchy level (roots are depth 1)
pub const MAX_DEPTH: usize = 3;

/// Collects tag definitions and validates them one at a time.
///
/// Nodes must be registered parents-first. Related ids may point forward;
/// they are checked once in [`TaxonomyBuilder::finalize`].
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    nodes: IndexMap<TagId, TagNode>,
}

impl TaxonomyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn register(&mut self, mut node: TagNode) -> Result<&mut Self, TaxonomyError> {
        if self.nodes.contains_key(&node.id) {
            return Err(TaxonomyError::DuplicateId { id: node.id });
        }

        let invalid = |id: &TagId, reason: String| TaxonomyError::InvalidHierarchy {
            id: id.clone(),
            reason,
        };

        if node.category != node.id.category() {
            return Err(invalid(
                &node.id,
                format!(
                    "category {} does not match id prefix {}",
                    node.category,
                    node.id.category()
                ),
            ));
        }

        match &node.parent_id {
            None => {
                if node.id.segment_count() != 2 {
                    return Err(invalid(&node.id, "child-shaped id registered without a parent".into()));
                }
            }
            Some(parent_id) => {
                let Some(parent) = self.nodes.get(parent_id) else {
                    return Err(invalid(&node.id, format!("parent {} is not registered", parent_id)));
                };
                if parent.category != node.category {
                    return Err(invalid(
                        &node.id,
                        format!("parent {} belongs to category {}", parent_id, parent.category),
                    ));
                }
                let depth = self.depth_of(parent_id) + 1;
                if depth > MAX_DEPTH {
                    return Err(invalid(&node.id, format!("depth {} exceeds {}", depth, MAX_DEPTH)));
                }
                if node.id.structural_parent().as_ref() != Some(parent_id) {
                    return Err(invalid(
                        &node.id,
                        format!("id must be {}.<leaf>", parent_id),
                    ));
                }
            }
        }

        node.child_ids.clear();
        if let Some(parent_id) = node.parent_id.clone() {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.child_ids.insert(node.id.clone());
            }
        }

        tracing::trace!(id = %node.id, "registered tag");
        self.nodes.insert(node.id.clone(), node);
        Ok(self)
    }

    fn depth_of(&self, id: &TagId) -> usize {
        let mut depth = 0;
        let mut current = Some(id);
        while let Some(id) = current {
            depth += 1;
            if depth > MAX_DEPTH {
                break;
            }
            current = self.nodes.get(id).and_then(|n| n.parent_id.as_ref());
        }
        depth
    }

    /// Check related references, build the lookup indices and freeze the registry
    #[tracing::instrument(skip_all, fields(tags = self.nodes.len()))]
    pub fn finalize(self) -> Result<TaxonomyRegistry, TaxonomyError> {
        for node in self.nodes.values() {
            if let Some(missing) = node.related_ids.iter().find(|r| !self.nodes.contains_key(*r)) {
                return Err(TaxonomyError::RegistryIntegrity {
                    id: node.id.clone(),
                    missing: missing.clone(),
                });
            }
        }

        let mut by_category: HashMap<Category, Vec<TagId>> = HashMap::new();
        for id in self.nodes.keys() {
            by_category.entry(id.category()).or_default().push(id.clone());
        }

        let (index, collisions) = TagIndex::build(&self.nodes);

        tracing::info!(
            tags = self.nodes.len(),
            names = index.names.len(),
            synonyms = index.synonyms.len(),
            leaves = index.leaves.len(),
            collisions = collisions.len(),
            "taxonomy registry finalized"
        );

        Ok(TaxonomyRegistry {
            nodes: self.nodes,
            by_category,
            index,
            collisions,
        })
    }
}

/// Immutable set of canonical tags with precomputed lookup indices.
///
/// Safe to share across threads once built; nothing mutates it after
/// [`TaxonomyBuilder::finalize`].
#[derive(Debug, Clone)]
pub struct TaxonomyRegistry {
    nodes: IndexMap<TagId, TagNode>,
    by_category: HashMap<Category, Vec<TagId>>,
    pub(crate) index: TagIndex,
    collisions: Vec<Collision>,
}

impl TaxonomyRegistry {
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::new()
    }

    /// Register `nodes` in order and finalize
    pub fn from_nodes<I>(nodes: I) -> Result<Self, TaxonomyError>
    where
        I: IntoIterator<Item = TagNode>,
    {
        let mut builder = TaxonomyBuilder::new();
        for node in nodes {
            builder.register(node)?;
        }
        builder.finalize()
    }

    pub fn get(&self, id: &TagId) -> Option<&TagNode> {
        self.nodes.get(id)
    }

    /// Look up by raw id string; malformed ids simply miss
    pub fn get_str(&self, raw: &str) -> Option<&TagNode> {
        TagId::parse(raw).ok().and_then(|id| self.nodes.get(&id))
    }

    /// Like [`get`](Self::get) but with a `NotFound` error
    pub fn require(&self, id: &TagId) -> Result<&TagNode, TaxonomyError> {
        self.nodes
            .get(id)
            .ok_or_else(|| TaxonomyError::NotFound { id: id.clone() })
    }

    pub fn contains(&self, id: &TagId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TagNode> {
        self.nodes.values()
    }

    /// Registration index of `id`
    pub fn position(&self, id: &TagId) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &TagId> {
        self.nodes.keys()
    }

    /// Nodes of one category in registration order
    pub fn all_in_category(&self, category: Category) -> Vec<&TagNode> {
        self.by_category
            .get(&category)
            .map(|ids| ids.iter().filter_map(|id| self.nodes.get(id)).collect())
            .unwrap_or_default()
    }

    /// Tag count for every category, in display order
    pub fn categories(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.by_category.get(c).map_or(0, Vec::len)))
            .collect()
    }

    /// Lookup keys claimed by more than one node
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    #[cfg(test)]
    pub(crate) fn node_mut(&mut self, id: &TagId) -> Option<&mut TagNode> {
        self.nodes.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(s: &str) -> TagId {
        TagId::parse(s).unwrap()
    }

    fn root(s: &str, name: &str) -> TagNode {
        TagNode::new(id(s), name)
    }

    fn child(s: &str, name: &str) -> TagNode {
        let tag = id(s);
        let parent = tag.structural_parent().unwrap();
        TagNode::new(tag, name).with_parent(parent)
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = TaxonomyRegistry::from_nodes([
            root("cuisine.italian", "Italian").with_popularity(95),
            child("cuisine.italian.sicilian", "Sicilian"),
            root("course.dessert", "Dessert"),
        ])
        .unwrap();

        assert_eq!(registry.len(), 3);
        let italian = registry.get(&id("cuisine.italian")).unwrap();
        assert_eq!(italian.popularity, 95);
        assert_eq!(
            italian.child_ids.iter().map(TagId::as_str).collect::<Vec<_>>(),
            vec!["cuisine.italian.sicilian"]
        );
        assert!(registry.get_str("cuisine.french").is_none());
        assert!(registry.get_str("not an id").is_none());
        assert!(matches!(
            registry.require(&id("cuisine.french")),
            Err(TaxonomyError::NotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let err = TaxonomyRegistry::from_nodes([
            root("season.summer", "Summer"),
            root("season.summer", "Summer again"),
        ])
        .unwrap_err();

        assert_eq!(err, TaxonomyError::DuplicateId { id: id("season.summer") });
    }

    #[test]
    fn test_parent_must_exist() {
        let err = TaxonomyRegistry::from_nodes([child("cuisine.italian.sicilian", "Sicilian")])
            .unwrap_err();
        assert!(matches!(err, TaxonomyError::InvalidHierarchy { .. }));
    }

    #[test]
    fn test_parent_category_must_match() {
        let err = TaxonomyRegistry::from_nodes([
            root("cuisine.italian", "Italian"),
            TagNode::new(id("course.italian.antipasti"), "Antipasti").with_parent(id("cuisine.italian")),
        ])
        .unwrap_err();
        assert!(matches!(err, TaxonomyError::InvalidHierarchy { .. }));
    }

    #[test]
    fn test_child_shape_must_follow_parent() {
        let err = TaxonomyRegistry::from_nodes([
            root("cuisine.italian", "Italian"),
            root("cuisine.french", "French"),
            TagNode::new(id("cuisine.french.provencal"), "Provencal").with_parent(id("cuisine.italian")),
        ])
        .unwrap_err();
        assert!(matches!(err, TaxonomyError::InvalidHierarchy { .. }));

        let err = TaxonomyRegistry::from_nodes([root("cuisine.french.provencal", "Provencal")])
            .unwrap_err();
        assert!(matches!(err, TaxonomyError::InvalidHierarchy { .. }));
    }

    #[test]
    fn test_category_must_match_id() {
        let mut node = root("cuisine.italian", "Italian");
        node.category = Category::Course;
        let err = TaxonomyRegistry::from_nodes([node]).unwrap_err();
        assert!(matches!(err, TaxonomyError::InvalidHierarchy { .. }));
    }

    #[test]
    fn test_related_must_resolve() {
        let err = TaxonomyRegistry::from_nodes([
            root("cuisine.italian", "Italian").with_related([id("mainIngredient.pasta")]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            TaxonomyError::RegistryIntegrity {
                id: id("cuisine.italian"),
                missing: id("mainIngredient.pasta"),
            }
        );
    }

    #[test]
    fn test_related_may_point_forward() {
        let registry = TaxonomyRegistry::from_nodes([
            root("cuisine.italian", "Italian").with_related([id("mainIngredient.pasta")]),
            root("mainIngredient.pasta", "Pasta"),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_supplied_child_ids_are_ignored() {
        let mut node = root("cuisine.italian", "Italian");
        node.child_ids.insert(id("cuisine.italian.ghost"));
        let registry = TaxonomyRegistry::from_nodes([node]).unwrap();
        assert!(!registry.get(&id("cuisine.italian")).unwrap().has_children());
    }

    #[test]
    fn test_category_listing_keeps_registration_order() {
        let registry = TaxonomyRegistry::from_nodes([
            root("season.winter", "Winter"),
            root("cuisine.thai", "Thai"),
            root("season.autumn", "Autumn"),
        ])
        .unwrap();

        let seasons: Vec<&str> = registry
            .all_in_category(Category::Season)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(seasons, vec!["season.winter", "season.autumn"]);
        assert!(registry.all_in_category(Category::Other).is_empty());

        let counts = registry.categories();
        assert_eq!(counts.len(), Category::ALL.len());
        assert_eq!(counts[0], (Category::Cuisine, 1));
    }

    #[test]
    fn test_collisions_are_recorded() {
        let registry = TaxonomyRegistry::from_nodes([
            root("difficulty.beginner", "Beginner").with_synonyms(["easy"]),
            root("planning.simple", "Simple").with_synonyms(["easy"]),
        ])
        .unwrap();

        assert_eq!(registry.collisions().len(), 1);
        assert_eq!(registry.collisions()[0].kept, id("difficulty.beginner"));
    }
}
