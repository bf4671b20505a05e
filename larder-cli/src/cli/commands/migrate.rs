use crate::cli::output::*;
use crate::cli::{print_json, Context};
use anyhow::Result;
use clap::Args;
use larder_core::MigrationStrategy;
use larder_migrate::{read_records, write_records, MigrationPlanner};
use serde_json::json;
use std::path::PathBuf;

#[derive(Args)]
pub struct MigrateArgs {
    /// Recipe records to migrate (JSON array or JSON lines)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Where to write the migrated records; same format as the input
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Rewrite strategy (defaults to migration.strategy)
    #[arg(short, long, value_enum)]
    pub strategy: Option<MigrationStrategy>,
}

pub fn run(args: MigrateArgs, ctx: &Context) -> Result<()> {
    let planner = MigrationPlanner::new(&ctx.registry).with_config(&ctx.config);
    let strategy = args.strategy.unwrap_or_else(|| planner.default_strategy());

    let records = read_records(&args.input)?;
    let report = planner.report_records(&records);
    let count = records.len();

    let migrated = planner.batch_migrate(records, strategy);
    write_records(&args.output, &migrated)?;

    tracing::info!(
        records = count,
        strategy = %strategy,
        output = %args.output.display(),
        "records migrated"
    );

    if ctx.is_json() {
        return print_json(&json!({
            "records": count,
            "strategy": strategy,
            "output": args.output,
            "report": report,
            "migratedAt": chrono::Utc::now().to_rfc3339(),
        }));
    }

    success(&format!(
        "Migrated {} records with strategy {} to {}",
        format_number(count),
        strategy,
        args.output.display()
    ));
    if report.fallback_count > 0 && strategy != MigrationStrategy::LegacyOnly {
        warning(&format!(
            "{} tag(s) fell back to other.*; run `larder report --input {}` for details",
            report.fallback_count,
            args.input.display()
        ));
    }
    Ok(())
}
