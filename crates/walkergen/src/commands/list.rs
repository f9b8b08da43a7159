//! List command implementation

use anyhow::{bail, Result};
use colored::*;
use serde::Serialize;
use sysview_walker::{Attribute, ViewKind};
use walkergen::config::ViewConfig;
use walkergen::pipeline::analyze_view;
use walkergen::theme;
use walkergen::Config;

#[derive(Serialize)]
struct ViewListing<'a> {
    name: &'a str,
    kind: ViewKind,
    path: String,
    count: usize,
    attributes: Vec<Attribute>,
}

pub fn list_attributes(config: &Config, view: Option<&str>, format: &str) -> Result<()> {
    if format != "text" && format != "json" {
        bail!("Unknown format '{}' (expected text or json)", format);
    }

    let views: Vec<&ViewConfig> = match view {
        Some(name) => match config.view(name) {
            Some(v) => vec![v],
            None => bail!("View `{}` is not configured", name),
        },
        None => config.views.iter().collect(),
    };

    let mut listings = Vec::with_capacity(views.len());
    for view in views {
        let (view_type, attributes) = analyze_view(config, view)?;
        listings.push(ViewListing {
            name: &view.name,
            kind: view_type.kind,
            path: view_type.path(),
            count: attributes.len(),
            attributes,
        });
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    for listing in &listings {
        println!("\n{} {}", listing.name.bold().underline(), theme::info(&listing.path));
        println!();

        if listing.attributes.is_empty() {
            println!("  (no attributes)");
        }

        for attr in &listing.attributes {
            println!(
                "  {}  {:<32} {} {}",
                theme::index(attr.index),
                attr.name,
                theme::kind_badge(attr.ty.kind_name()),
                attr.ty
            );
        }

        println!("\n  {} attribute(s)", listing.count);
    }

    Ok(())
}
