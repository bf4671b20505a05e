use crate::cli::output::*;
use crate::cli::{print_json, Context};
use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use larder_migrate::{read_records, MigrationPlanner};
use std::path::PathBuf;

#[derive(Args)]
pub struct ReportArgs {
    /// Recipe records: a JSON array, or .jsonl/.ndjson with one record per line
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,
}

pub fn run(args: ReportArgs, ctx: &Context) -> Result<()> {
    let records = read_records(&args.input)?;
    let planner = MigrationPlanner::new(&ctx.registry).with_config(&ctx.config);
    let report = planner.report_records(&records);

    if ctx.is_json() {
        return print_json(&report);
    }

    section_header(&format!("Migration report: {}", args.input.display()));
    tree_items(&[
        ("Records", format_number(records.len())),
        ("Tags", format_number(report.total)),
        ("Already canonical", format_number(report.already_canonical_count)),
        ("Mapped", format_number(report.mapped_count)),
        ("Fallback", format_number(report.fallback_count)),
        ("Resolved", format_percent(report.resolution_rate())),
    ]);

    if !report.sample_mappings.is_empty() {
        section_header("Sample mappings");
        let mut table = create_standard_table();
        table.set_header(vec![header_cell("Legacy tag"), header_cell("Tag")]);
        for mapping in &report.sample_mappings {
            table.add_row(vec![Cell::new(&mapping.raw), Cell::new(mapping.id.as_str())]);
        }
        println!("{}", table);
    }

    if report.fallback_list.is_empty() {
        success("Every tag resolved to the taxonomy");
    } else {
        section_header("Unmatched tags");
        for raw in &report.fallback_list {
            warning(&format!("{:?}", raw));
        }
    }
    Ok(())
}
