use crate::cli::output::*;
use crate::cli::{print_json, Context};
use anyhow::Result;
use comfy_table::Cell;
use larder_taxonomy::HierarchyResolver;
use serde_json::json;

pub fn run(ctx: &Context) -> Result<()> {
    let counts = ctx.registry.categories();
    let resolver = HierarchyResolver::new(&ctx.registry);

    if ctx.is_json() {
        let rows: Vec<_> = counts
            .iter()
            .map(|(category, count)| {
                json!({
                    "category": category,
                    "name": category.display_name(),
                    "tags": count,
                    "roots": resolver.roots(*category).len(),
                })
            })
            .collect();
        return print_json(&rows);
    }

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Name"),
        header_cell("Tags"),
        header_cell("Top level"),
    ]);
    for (category, count) in &counts {
        table.add_row(vec![
            Cell::new(category.as_str()),
            Cell::new(category.display_name()),
            Cell::new(count),
            Cell::new(resolver.roots(*category).len()),
        ]);
    }
    println!("{}", table);
    println!("{} tags in total", format_number(ctx.registry.len()));
    Ok(())
}
