use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use sysview_walker::constants::{DEFAULT_PROTOCOL_PATH, DEFAULT_SUFFIX};
use sysview_walker::{artifact_file_name, EmitOptions};

/// Default config file name
pub const CONFIG_FILENAME: &str = "walkergen.toml";

/// Generator configuration with layered defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source root; view sources and the output directory are relative to it
    pub source_root: PathBuf,

    /// Directory for generated walkers, relative to the source root
    pub output_dir: PathBuf,

    /// Suffix appended to a view name to form its walker name
    pub suffix: String,

    /// Module path exporting the walker protocol traits
    pub protocol_path: String,

    /// Text placed at the top of every generated file
    pub header: Option<String>,

    /// Views to generate walkers for, in generation order
    pub views: Vec<ViewConfig>,
}

/// One configured view type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Name of the trait or type
    pub name: String,

    /// Source file declaring it, relative to the source root
    pub source: PathBuf,

    /// Module path the source file compiles as, e.g. `crate::views`
    pub module: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src"),
            output_dir: PathBuf::from("walker"),
            suffix: DEFAULT_SUFFIX.to_string(),
            protocol_path: DEFAULT_PROTOCOL_PATH.to_string(),
            header: None,
            views: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from `path`; relative roots resolve against its directory
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        Self::from_toml(&contents, base_dir)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Parse configuration text, resolving the source root against `base_dir`
    pub fn from_toml(contents: &str, base_dir: &Path) -> Result<Self> {
        let file_config: PartialConfig =
            toml::from_str(contents).context("Failed to parse walkergen config")?;

        let mut config = Config::default();
        config.merge(file_config);
        config.source_root = base_dir.join(&config.source_root);
        config.validate()?;

        Ok(config)
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.source_root {
            self.source_root = val;
        }
        if let Some(val) = other.output_dir {
            self.output_dir = val;
        }
        if let Some(val) = other.suffix {
            self.suffix = val;
        }
        if let Some(val) = other.protocol_path {
            self.protocol_path = val;
        }
        if other.header.is_some() {
            self.header = other.header;
        }
        self.views = other.views;
    }

    fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            bail!("`suffix` must not be empty");
        }

        let mut seen = BTreeSet::new();
        for view in &self.views {
            if view.name.is_empty() {
                bail!("A view entry has an empty `name`");
            }
            if view.module.is_empty() {
                bail!("View `{}` has an empty `module`", view.name);
            }
            if !seen.insert(view.name.as_str()) {
                bail!("View `{}` is configured more than once", view.name);
            }
        }

        Ok(())
    }

    /// Look up a configured view by name
    pub fn view(&self, name: &str) -> Option<&ViewConfig> {
        self.views.iter().find(|v| v.name == name)
    }

    /// Path of the source file declaring `view`
    pub fn source_path(&self, view: &ViewConfig) -> PathBuf {
        self.source_root.join(&view.source)
    }

    /// Path the walker for `view` is written to
    pub fn output_path(&self, view: &ViewConfig) -> PathBuf {
        self.source_root.join(&self.output_dir).join(artifact_file_name(&view.name, &self.suffix))
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            suffix: self.suffix.clone(),
            protocol_path: self.protocol_path.clone(),
            header: self.header.clone(),
        }
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    source_root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    suffix: Option<String>,
    protocol_path: Option<String>,
    header: Option<String>,
    #[serde(default, rename = "view")]
    views: Vec<ViewConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
source_root = "src"
output_dir = "internal/walker"

[[view]]
name = "CacheView"
source = "views/cache.rs"
module = "crate::views::cache"

[[view]]
name = "ServiceView"
source = "views/service.rs"
module = "crate::views::service"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_root, PathBuf::from("src"));
        assert_eq!(config.output_dir, PathBuf::from("walker"));
        assert_eq!(config.suffix, "Walker");
        assert_eq!(config.protocol_path, "sysview_walker::protocol");
        assert!(config.views.is_empty());
    }

    #[test]
    fn test_views_keep_file_order() {
        let config = Config::from_toml(SAMPLE, Path::new("/project")).unwrap();
        let names: Vec<_> = config.views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["CacheView", "ServiceView"]);
    }

    #[test]
    fn test_paths_resolve_against_base_dir() {
        let config = Config::from_toml(SAMPLE, Path::new("/project")).unwrap();
        let view = config.view("CacheView").unwrap();

        assert_eq!(config.source_path(view), PathBuf::from("/project/src/views/cache.rs"));
        assert_eq!(
            config.output_path(view),
            PathBuf::from("/project/src/internal/walker/cache_view_walker.rs")
        );
    }

    #[test]
    fn test_custom_suffix_and_header() {
        let text = r#"
suffix = "Attrs"
protocol_path = "crate::protocol"
header = "// Licensed under MIT."
"#;
        let config = Config::from_toml(text, Path::new("")).unwrap();
        let options = config.emit_options();

        assert_eq!(options.suffix, "Attrs");
        assert_eq!(options.protocol_path, "crate::protocol");
        assert_eq!(options.header.as_deref(), Some("// Licensed under MIT."));
    }

    #[test]
    fn test_duplicate_view_rejected() {
        let text = r#"
[[view]]
name = "CacheView"
source = "a.rs"
module = "crate::a"

[[view]]
name = "CacheView"
source = "b.rs"
module = "crate::b"
"#;
        let err = Config::from_toml(text, Path::new("")).unwrap_err();
        assert!(err.to_string().contains("configured more than once"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml("sufix = \"Walker\"", Path::new("")).unwrap_err();
        assert!(format!("{:#}", err).contains("sufix"));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, SAMPLE).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.source_root, temp.path().join("src"));
        assert_eq!(config.views.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/walkergen.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
