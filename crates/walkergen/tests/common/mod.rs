// Test infrastructure and utilities for walkergen tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CACHE_VIEW_SOURCE: &str = r#"
use std::time::Duration;

pub trait CacheView {
    /// walker:order=1
    fn cache_name(&self) -> String;
    /// walker:order=0
    fn cache_id(&self) -> i32;
    fn expiry(&self) -> Duration;
    fn backups(&self) -> i16;
    fn to_string(&self) -> String;
}
"#;

pub const SERVICE_VIEW_SOURCE: &str = r#"
pub struct ServiceView {
    name: String,
    total: i32,
}

impl ServiceView {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_count(&self) -> i32 {
        self.total
    }

    pub fn new(name: String) -> Self {
        Self { name, total: 0 }
    }

    fn internal(&self) -> bool {
        true
    }
}
"#;

pub const SAMPLE_CONFIG: &str = r#"
[[view]]
name = "CacheView"
source = "views/cache.rs"
module = "crate::views::cache"

[[view]]
name = "ServiceView"
source = "views/service.rs"
module = "crate::views::service"
"#;

/// A throwaway project directory holding a config and view sources
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn with_config(self, contents: &str) -> Self {
        fs::write(self.config_path(), contents).unwrap();
        self
    }

    /// Write a file relative to the project's `src` directory
    pub fn with_source(self, relative: &str, contents: &str) -> Self {
        let path = self.src(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("walkergen.toml")
    }

    pub fn src(&self, relative: &str) -> PathBuf {
        self.dir.path().join("src").join(relative)
    }

    pub fn read_src(&self, relative: &str) -> String {
        fs::read_to_string(self.src(relative)).unwrap()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Project with a cache view (trait) and a service view (inherent impl)
pub fn sample_project() -> TestProject {
    TestProject::new()
        .with_config(SAMPLE_CONFIG)
        .with_source("views/cache.rs", CACHE_VIEW_SOURCE)
        .with_source("views/service.rs", SERVICE_VIEW_SOURCE)
}
