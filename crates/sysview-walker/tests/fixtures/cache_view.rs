//! Cache view used by the walker tests.

use std::time::Duration;

/// Cache mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    Local,
    Replicated,
    Partitioned,
}

/// Cache representation for system views.
pub trait CacheView {
    /// walker:order=1
    fn cache_name(&self) -> String;

    /// Cache identifier.
    /// walker:order=0
    fn cache_id(&self) -> i32;

    /// walker:order=2
    fn cache_mode(&self) -> CacheMode;

    fn backups(&self) -> i16;

    fn expiry(&self) -> Duration;

    fn group_name(&self) -> Option<String>;

    fn is_system(&self) -> bool;

    fn load_factor(&self) -> f32;

    fn node_filter(&self) -> &str;

    fn partitions(&self) -> u32;

    fn priority(&self) -> i8;

    fn read_through_ratio(&self) -> f64;

    fn size(&self) -> i64;

    fn type_marker(&self) -> char;

    fn to_string(&self) -> String;

    fn reset(&mut self);

    fn entry(&self, key: &str) -> Option<String>;

    fn default_mode() -> CacheMode
    where
        Self: Sized;
}
