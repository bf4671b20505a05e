/// Taxonomy nodes
use indexmap::IndexSet;
use larder_core::{Category, TagId};
use serde::{Deserialize, Serialize};

/// Highest popularity a node may carry
pub const MAX_POPULARITY: u8 = 100;

/// A single canonical tag.
///
/// `child_ids` is owned by the registry: it is filled in as children are
/// registered and is ignored on nodes passed to
/// [`TaxonomyBuilder::register`](crate::TaxonomyBuilder::register).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagNode {
    pub id: TagId,
    pub canonical_name: String,
    pub category: Category,
    pub parent_id: Option<TagId>,
    #[serde(default)]
    pub child_ids: IndexSet<TagId>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub related_ids: IndexSet<TagId>,
    #[serde(default)]
    pub popularity: u8,
}

impl TagNode {
    /// Root-level node; category is taken from the id
    pub fn new(id: TagId, canonical_name: impl Into<String>) -> Self {
        let category = id.category();
        Self {
            id,
            canonical_name: canonical_name.into(),
            category,
            parent_id: None,
            child_ids: IndexSet::new(),
            synonyms: Vec::new(),
            related_ids: IndexSet::new(),
            popularity: 0,
        }
    }

    pub fn with_parent(mut self, parent: TagId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms.extend(synonyms.into_iter().map(Into::into));
        self
    }

    /// Repeated ids collapse into one edge
    pub fn with_related<I>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = TagId>,
    {
        self.related_ids.extend(related);
        self
    }

    /// Values above [`MAX_POPULARITY`] are clamped
    pub fn with_popularity(mut self, popularity: u8) -> Self {
        self.popularity = popularity.min(MAX_POPULARITY);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.child_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let node = TagNode::new(TagId::parse("dietary.vegetarian.vegan").unwrap(), "Vegan")
            .with_parent(TagId::parse("dietary.vegetarian").unwrap())
            .with_synonyms(["plant-based"])
            .with_popularity(250);

        assert_eq!(node.category, Category::Dietary);
        assert_eq!(node.synonyms, vec!["plant-based".to_string()]);
        assert_eq!(node.popularity, MAX_POPULARITY);
        assert!(!node.is_root());
        assert!(!node.has_children());
    }

    #[test]
    fn test_related_ids_collapse_repeats() {
        let pasta = TagId::parse("mainIngredient.grain.pasta").unwrap();
        let node = TagNode::new(TagId::parse("cuisine.italian").unwrap(), "Italian")
            .with_related([pasta.clone(), pasta.clone()]);
        assert_eq!(node.related_ids.len(), 1);
        assert!(node.related_ids.contains(&pasta));
    }

    #[test]
    fn test_serializes_camel_case() {
        let node = TagNode::new(TagId::parse("planning.quick").unwrap(), "Quick");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["canonicalName"], "Quick");
        assert_eq!(json["category"], "planning");
        assert!(json["parentId"].is_null());
    }
}
