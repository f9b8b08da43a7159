//! Check command implementation

use anyhow::{bail, Result};
use colored::*;
use walkergen::pipeline::generate_all;
use walkergen::theme;
use walkergen::writer::{freshness, Freshness};
use walkergen::Config;

pub fn check_walkers(config: &Config) -> Result<()> {
    let artifacts = generate_all(config)?;
    let mut outdated = 0;

    for artifact in &artifacts {
        let (symbol, status) = match freshness(&artifact.path, &artifact.code)? {
            Freshness::UpToDate => (theme::success(theme::success_symbol()), "up to date".normal()),
            Freshness::Stale => {
                outdated += 1;
                (theme::error_symbol().red(), theme::warning("out of date"))
            }
            Freshness::Missing => {
                outdated += 1;
                (theme::error_symbol().red(), theme::warning("missing"))
            }
        };

        println!("{} {} {} ({})", symbol, artifact.view.bold(), artifact.path.display(), status);
    }

    if outdated > 0 {
        bail!("{} walker(s) out of date; run `walkergen generate`", outdated);
    }

    println!("\n{}", theme::success(&format!("All {} walker(s) up to date", artifacts.len())));
    Ok(())
}
