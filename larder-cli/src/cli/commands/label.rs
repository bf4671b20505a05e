use super::require_tag;
use crate::cli::output::*;
use crate::cli::{print_json, Context};
use anyhow::Result;
use clap::Args;
use larder_core::TagId;
use serde::Serialize;

#[derive(Args)]
pub struct LabelArgs {
    /// Canonical tag id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Locale such as "fr" or "es-MX" (defaults to localization.default_locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Show the label in every supported locale
    #[arg(long, conflicts_with = "locale")]
    pub all: bool,
}

#[derive(Serialize)]
struct Label {
    id: TagId,
    locale: String,
    label: String,
    description: Option<String>,
}

pub fn run(args: LabelArgs, ctx: &Context) -> Result<()> {
    let id = require_tag(ctx, &args.id)?;
    let store = ctx.localization()?;

    let locales: Vec<String> = if args.all {
        store.supported_locales().into_iter().map(String::from).collect()
    } else {
        vec![args
            .locale
            .unwrap_or_else(|| store.default_locale().to_string())]
    };

    let labels: Vec<Label> = locales
        .into_iter()
        .map(|locale| Label {
            id: id.clone(),
            label: store.get_label(&id, &locale),
            description: store.get_description(&id, &locale).map(String::from),
            locale,
        })
        .collect();

    if ctx.is_json() {
        return match labels.as_slice() {
            [single] => print_json(single),
            _ => print_json(&labels),
        };
    }

    section_header(id.as_str());
    for label in &labels {
        let mut items = vec![("Label", label.label.clone())];
        if let Some(description) = &label.description {
            items.push(("Description", description.clone()));
        }
        println!("{}", label.locale);
        tree_items(&items);
    }
    Ok(())
}
