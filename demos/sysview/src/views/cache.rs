use std::time::Duration;

/// Cache distribution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    Local,
    Replicated,
    Partitioned,
}

/// Rebalance mode of a cache group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceMode {
    Sync,
    Async,
    None,
}

/// Cache representation for the system view.
pub trait CacheView {
    /// walker:order=0
    fn cache_group_id(&self) -> i32;

    /// walker:order=1
    fn cache_group_name(&self) -> String;

    /// walker:order=2
    fn cache_id(&self) -> i32;

    /// walker:order=3
    fn cache_name(&self) -> String;

    /// walker:order=4
    fn cache_type(&self) -> String;

    /// walker:order=5
    fn cache_mode(&self) -> CacheMode;

    /// walker:order=6
    fn atomicity_mode(&self) -> String;

    /// walker:order=7
    fn data_region_name(&self) -> Option<String>;

    fn affinity(&self) -> String;

    fn backups(&self) -> i32;

    fn default_lock_timeout(&self) -> Duration;

    fn eager_ttl(&self) -> bool;

    fn expiry_policy_factory(&self) -> Option<String>;

    fn is_copy_on_read(&self) -> bool;

    fn is_on_heap_cache_enabled(&self) -> bool;

    fn max_concurrent_async_operations(&self) -> i32;

    fn max_query_iterators_count(&self) -> i32;

    fn partition_loss_policy(&self) -> String;

    fn query_detail_metrics_size(&self) -> i32;

    fn read_from_backup(&self) -> bool;

    fn rebalance_batch_size(&self) -> i32;

    fn rebalance_delay(&self) -> i64;

    fn rebalance_mode(&self) -> RebalanceMode;

    fn rebalance_order(&self) -> i32;

    fn rebalance_throttle(&self) -> i64;

    fn rebalance_timeout(&self) -> i64;

    fn sql_escape_all(&self) -> bool;

    fn sql_index_max_inline_size(&self) -> i32;

    fn sql_schema(&self) -> Option<String>;

    fn statistics_enabled(&self) -> bool;

    fn write_behind_batch_size(&self) -> i32;

    fn write_behind_coalescing(&self) -> bool;

    fn write_behind_enabled(&self) -> bool;

    fn write_behind_flush_frequency(&self) -> i64;

    fn write_behind_flush_size(&self) -> i32;

    fn write_synchronization_mode(&self) -> String;
}
