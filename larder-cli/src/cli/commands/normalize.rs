use crate::cli::output::*;
use crate::cli::{print_json, Context};
use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use larder_taxonomy::Normalizer;
use serde::Serialize;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Free-text tags, e.g. "Italian" "easy" "plant-based"
    #[arg(required = true, value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only print the deduplicated ids, one per line
    #[arg(long)]
    pub ids_only: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NormalizedTag<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: larder_core::NormalizationResult,
}

pub fn run(args: NormalizeArgs, ctx: &Context) -> Result<()> {
    let normalizer = Normalizer::new(&ctx.registry);

    if args.ids_only {
        let ids = normalizer.batch_normalize(&args.tags);
        if ctx.is_json() {
            return print_json(&ids);
        }
        for id in ids {
            println!("{}", id);
        }
        return Ok(());
    }

    let results: Vec<NormalizedTag> = args
        .tags
        .iter()
        .map(|input| NormalizedTag {
            input,
            result: normalizer.normalize(input),
        })
        .collect();

    if ctx.is_json() {
        return print_json(&results);
    }

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Tag"),
        header_cell("Match"),
    ]);
    for row in &results {
        table.add_row(vec![
            Cell::new(row.input),
            Cell::new(row.result.id.as_str()),
            match_cell(row.result.match_type),
        ]);
    }
    println!("{}", table);

    let fallbacks = results.iter().filter(|r| r.result.is_fallback()).count();
    if fallbacks > 0 {
        warning(&format!(
            "{} of {} tags did not match the taxonomy",
            fallbacks,
            results.len()
        ));
    }
    Ok(())
}
