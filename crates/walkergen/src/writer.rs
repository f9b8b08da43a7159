//! Scoped artifact writing
//!
//! Walkers are written to a temporary file next to the destination and
//! renamed over it once complete, so a failed run never leaves a truncated
//! walker behind.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// State of a walker on disk relative to freshly generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Write `code` to `path`, replacing any previous walker atomically
pub fn write_artifact(path: &Path, code: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    file.write_all(code.as_bytes())
        .and_then(|_| file.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .with_context(|| format!("Failed to set permissions for {}", path.display()))?;
    }

    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

/// Compare the walker at `path` with `code`
pub fn freshness(path: &Path, code: &str) -> Result<Freshness> {
    if !path.exists() {
        return Ok(Freshness::Missing);
    }

    let existing =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(if existing == code { Freshness::UpToDate } else { Freshness::Stale })
}
