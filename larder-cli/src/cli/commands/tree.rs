use super::require_tag;
use crate::cli::output::*;
use crate::cli::{print_json, Context};
use anyhow::Result;
use clap::Args;
use colored::*;
use larder_core::TagId;
use larder_taxonomy::HierarchyResolver;
use serde::Serialize;

#[derive(Args)]
pub struct TreeArgs {
    /// Canonical tag id, e.g. "cuisine.italian"
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TagTree {
    id: TagId,
    name: String,
    depth: usize,
    lineage: Vec<TagId>,
    parent: Option<TagId>,
    children: Vec<TagId>,
    descendants: Vec<TagId>,
    related: Vec<TagId>,
}

pub fn run(args: TreeArgs, ctx: &Context) -> Result<()> {
    let id = require_tag(ctx, &args.id)?;
    let resolver = HierarchyResolver::new(&ctx.registry);
    let node = ctx.registry.require(&id)?;

    let tree = TagTree {
        name: node.canonical_name.clone(),
        depth: resolver.depth(&id)?,
        lineage: resolver.lineage(&id)?,
        parent: resolver.parent(&id)?,
        children: resolver.children(&id)?,
        descendants: resolver.descendants(&id)?,
        related: resolver
            .related_tags(&id)?
            .into_iter()
            .map(|n| n.id.clone())
            .collect(),
        id,
    };

    if ctx.is_json() {
        return print_json(&tree);
    }

    let breadcrumb: Vec<&str> = tree
        .lineage
        .iter()
        .filter_map(|id| ctx.registry.get(id))
        .map(|n| n.canonical_name.as_str())
        .collect();

    section_header(&format!("{} ({})", tree.name, tree.id));
    println!("{}", breadcrumb.join(" › ").dimmed());
    println!();
    tree_items(&[
        ("Category", tree.id.category().display_name().to_string()),
        ("Depth", tree.depth.to_string()),
        ("Parent", display_optional(tree.parent.as_ref())),
        ("Children", display_list(&tree.children)),
        ("Descendants", display_list(&tree.descendants)),
        ("Related", display_list(&tree.related)),
    ]);
    Ok(())
}

fn display_optional(id: Option<&TagId>) -> String {
    id.map_or_else(|| "-".to_string(), ToString::to_string)
}

fn display_list(ids: &[TagId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter().map(TagId::as_str).collect::<Vec<_>>().join(", ")
}
