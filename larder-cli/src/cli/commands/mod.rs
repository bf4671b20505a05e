pub mod categories;
pub mod config;
pub mod label;
pub mod migrate;
pub mod normalize;
pub mod report;
pub mod search;
pub mod tree;
pub mod validate;

use crate::cli::Context;
use anyhow::Result;
use larder_core::TagId;

/// Parse a tag id argument and make sure the taxonomy knows it
pub fn require_tag(ctx: &Context, raw: &str) -> Result<TagId> {
    let id = TagId::parse(raw.trim())?;
    ctx.registry.require(&id)?;
    Ok(id)
}
