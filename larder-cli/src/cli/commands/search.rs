use crate::cli::output::*;
use crate::cli::{print_json, Context};
use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use larder_core::{Category, TagId};
use larder_taxonomy::{ScoredTag, SearchRanker};
use serde::Serialize;

#[derive(Args)]
pub struct SearchArgs {
    /// Search text; omit to rank by popularity
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Maximum number of results (defaults to search.default_limit)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Restrict results to one category, e.g. "cuisine" or "main ingredient"
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,

    /// Locale used for labels
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Args)]
pub struct PopularArgs {
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,

    #[arg(long)]
    pub locale: Option<String>,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

#[derive(Serialize)]
struct SearchHit {
    #[serde(flatten)]
    scored: ScoredTag,
    label: String,
}

pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let query = args.query.unwrap_or_default();
    rank_and_print(ctx, &query, args.limit, args.category, args.locale)
}

pub fn popular(args: PopularArgs, ctx: &Context) -> Result<()> {
    rank_and_print(ctx, "", args.limit, args.category, args.locale)
}

fn rank_and_print(
    ctx: &Context,
    query: &str,
    limit: Option<usize>,
    category: Option<Category>,
    locale: Option<String>,
) -> Result<()> {
    let store = ctx.localization()?;
    let ranker = SearchRanker::new(&ctx.registry)
        .with_config(&ctx.config.search)
        .with_descriptions(&store);

    let limit = limit.unwrap_or_else(|| ranker.default_limit());
    let candidates: Option<Vec<TagId>> = category.map(|c| {
        ctx.registry
            .all_in_category(c)
            .into_iter()
            .map(|node| node.id.clone())
            .collect()
    });
    let scored = ranker.rank(query, limit, candidates.as_deref());

    let locale = locale.unwrap_or_else(|| store.default_locale().to_string());
    let hits: Vec<SearchHit> = scored
        .into_iter()
        .map(|scored| {
            let label = store.get_label(&scored.id, &locale);
            SearchHit { scored, label }
        })
        .collect();

    if ctx.is_json() {
        return print_json(&hits);
    }

    if hits.is_empty() {
        empty(&format!("No tags match '{}'", query));
        return Ok(());
    }

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Tag"),
        header_cell("Label"),
        header_cell("Score"),
        header_cell("Match"),
    ]);
    for (rank, hit) in hits.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(hit.scored.id.as_str()),
            Cell::new(&hit.label),
            Cell::new(hit.scored.score),
            Cell::new(
                hit.scored
                    .band
                    .map_or_else(|| "popularity".to_string(), |b| b.to_string()),
            ),
        ]);
    }
    println!("{}", table);
    Ok(())
}
