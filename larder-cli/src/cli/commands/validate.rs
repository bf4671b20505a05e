use crate::cli::output::*;
use crate::cli::{print_json, Context};
use anyhow::Result;
use clap::Args;
use larder_core::LarderError;
use larder_migrate::MigrationPlanner;

#[derive(Args)]
pub struct ValidateArgs {
    /// Tag ids to check, e.g. "cuisine.italian" "difficulty.beginner"
    #[arg(required = true, value_name = "ID")]
    pub tags: Vec<String>,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let planner = MigrationPlanner::new(&ctx.registry).with_config(&ctx.config);
    let report = planner.validate(&args.tags);

    if ctx.is_json() {
        print_json(&report)?;
    } else {
        for id in &report.valid {
            success(id.as_str());
        }
        for raw in &report.invalid {
            error(&format!("{} is not a registered tag id", raw));
        }
        for issue in &report.warnings {
            warning(&issue.to_string());
        }
    }

    if !report.is_valid() {
        return Err(LarderError::InvalidInput(format!(
            "{} invalid tag(s): {}",
            report.invalid.len(),
            report.invalid.join(", ")
        ))
        .into());
    }
    if args.strict && !report.is_clean() {
        return Err(LarderError::InvalidInput(format!(
            "{} warning(s) with --strict",
            report.warnings.len()
        ))
        .into());
    }
    Ok(())
}
