//! Parent/child navigation over a registry

use larder_core::{Category, TagId, TaxonomyError};
use std::collections::{HashSet, VecDeque};

use crate::node::TagNode;
use crate::registry::TaxonomyRegistry;

/// Traversals deeper than this are treated as corrupted data
pub const MAX_TRAVERSAL_DEPTH: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct HierarchyResolver<'a> {
    registry: &'a TaxonomyRegistry,
}

impl<'a> HierarchyResolver<'a> {
    pub fn new(registry: &'a TaxonomyRegistry) -> Self {
        Self { registry }
    }

    pub fn parent(&self, id: &TagId) -> Result<Option<TagId>, TaxonomyError> {
        Ok(self.registry.require(id)?.parent_id.clone())
    }

    /// Direct children in registration order
    pub fn children(&self, id: &TagId) -> Result<Vec<TagId>, TaxonomyError> {
        Ok(self.registry.require(id)?.child_ids.iter().cloned().collect())
    }

    /// Root first, ending at the immediate parent
    pub fn ancestors(&self, id: &TagId) -> Result<Vec<TagId>, TaxonomyError> {
        let mut ancestors = Vec::new();
        let mut current = self.registry.require(id)?;

        while let Some(parent_id) = &current.parent_id {
            if ancestors.len() >= MAX_TRAVERSAL_DEPTH {
                return Err(TaxonomyError::CycleDetected {
                    id: id.clone(),
                    depth: ancestors.len() + 1,
                });
            }
            ancestors.push(parent_id.clone());
            current = self.registry.require(parent_id)?;
        }

        ancestors.reverse();
        Ok(ancestors)
    }

    /// Breadth-first, each level in registration order
    pub fn descendants(&self, id: &TagId) -> Result<Vec<TagId>, TaxonomyError> {
        let root = self.registry.require(id)?;
        let mut seen: HashSet<&TagId> = HashSet::from([&root.id]);
        let mut queue: VecDeque<(&TagNode, usize)> = VecDeque::from([(root, 0)]);
        let mut descendants = Vec::new();

        while let Some((node, level)) = queue.pop_front() {
            for child_id in &node.child_ids {
                let depth = level + 1;
                if depth > MAX_TRAVERSAL_DEPTH || !seen.insert(child_id) {
                    return Err(TaxonomyError::CycleDetected { id: id.clone(), depth });
                }
                let child = self.registry.require(child_id)?;
                descendants.push(child_id.clone());
                queue.push_back((child, depth));
            }
        }

        Ok(descendants)
    }

    /// Related nodes in registration order
    pub fn related_tags(&self, id: &TagId) -> Result<Vec<&'a TagNode>, TaxonomyError> {
        let node = self.registry.require(id)?;
        let mut related = node
            .related_ids
            .iter()
            .map(|related| self.registry.require(related))
            .collect::<Result<Vec<_>, _>>()?;
        related.sort_by_key(|n| self.registry.position(&n.id));
        Ok(related)
    }

    /// 1 for roots
    pub fn depth(&self, id: &TagId) -> Result<usize, TaxonomyError> {
        Ok(self.ancestors(id)?.len() + 1)
    }

    /// Parentless nodes of `category` in registration order
    pub fn roots(&self, category: Category) -> Vec<&'a TagNode> {
        self.registry
            .all_in_category(category)
            .into_iter()
            .filter(|n| n.is_root())
            .collect()
    }

    /// True when `ancestor` lies strictly above `id`
    pub fn is_ancestor(&self, ancestor: &TagId, id: &TagId) -> Result<bool, TaxonomyError> {
        self.registry.require(ancestor)?;
        Ok(self.ancestors(id)?.contains(ancestor))
    }

    /// Root first, `id` last
    pub fn lineage(&self, id: &TagId) -> Result<Vec<TagId>, TaxonomyError> {
        let mut lineage = self.ancestors(id)?;
        lineage.push(id.clone());
        Ok(lineage)
    }
}
