//! Per-view generation: discover, enumerate, emit

use crate::config::{Config, ViewConfig};
use anyhow::{Context, Result};
use std::path::PathBuf;
use sysview_walker::{discover, emit, enumerate, Attribute, ViewType};

/// A generated walker, not yet written
#[derive(Debug, Clone)]
pub struct Artifact {
    pub view: String,
    pub path: PathBuf,
    pub attributes: Vec<Attribute>,
    pub code: String,
}

/// Discover `view` and enumerate its attributes
pub fn analyze_view(config: &Config, view: &ViewConfig) -> Result<(ViewType, Vec<Attribute>)> {
    let source_path = config.source_path(view);
    let source = std::fs::read_to_string(&source_path).with_context(|| {
        format!("Failed to read source of view `{}` at {}", view.name, source_path.display())
    })?;

    let view_type = discover(&source, &view.name, &view.module).with_context(|| {
        format!("Failed to discover view `{}` in {}", view.name, source_path.display())
    })?;

    let attributes = enumerate(&view_type)
        .with_context(|| format!("Failed to enumerate attributes of view `{}`", view.name))?;

    Ok((view_type, attributes))
}

/// Generate the walker for one configured view
pub fn generate_view(config: &Config, view: &ViewConfig) -> Result<Artifact> {
    let (view_type, attributes) = analyze_view(config, view)?;
    let code = emit(&view_type, &attributes, &config.emit_options());

    tracing::info!("{}: {} attributes", view.name, attributes.len());

    Ok(Artifact { view: view.name.clone(), path: config.output_path(view), attributes, code })
}

/// Generate walkers for every configured view, stopping at the first failure
pub fn generate_all(config: &Config) -> Result<Vec<Artifact>> {
    config.views.iter().map(|view| generate_view(config, view)).collect()
}
