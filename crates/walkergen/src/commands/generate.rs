//! Generate command implementation

use anyhow::{Context, Result};
use colored::*;
use walkergen::errors::print_warning;
use walkergen::pipeline::generate_all;
use walkergen::theme;
use walkergen::writer::write_artifact;
use walkergen::Config;

pub fn generate_walkers(config: &Config, dry_run: bool) -> Result<()> {
    if config.views.is_empty() {
        print_warning("No views configured; nothing to generate");
        return Ok(());
    }

    // Nothing is written unless every view generates cleanly
    let artifacts = generate_all(config)?;

    for artifact in &artifacts {
        if dry_run {
            println!(
                "{} Would write {} ({} attributes)",
                theme::arrow_symbol().cyan(),
                artifact.path.display(),
                artifact.attributes.len()
            );
            continue;
        }

        write_artifact(&artifact.path, &artifact.code).with_context(|| {
            format!("Failed to write walker for view `{}`", artifact.view)
        })?;

        tracing::info!("Wrote {}", artifact.path.display());
        println!(
            "{} {} {} ({} attributes)",
            theme::success(theme::success_symbol()),
            artifact.view.bold(),
            artifact.path.display(),
            artifact.attributes.len()
        );
    }

    if !dry_run {
        println!(
            "\n{}",
            theme::success(&format!("Generated {} walker(s)", artifacts.len()))
        );
    }

    Ok(())
}
