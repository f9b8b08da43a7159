use super::cache::{CacheMode, RebalanceMode};

/// Cache group representation for the system view.
pub trait CacheGroupView {
    /// walker:order=0
    fn cache_group_id(&self) -> i32;

    /// walker:order=1
    fn cache_group_name(&self) -> String;

    /// walker:order=2
    fn cache_count(&self) -> i32;

    /// walker:order=3
    fn data_region_name(&self) -> Option<String>;

    /// walker:order=4
    fn cache_mode(&self) -> CacheMode;

    fn affinity(&self) -> String;

    fn atomicity_mode(&self) -> Option<String>;

    fn backups(&self) -> i32;

    fn is_shared(&self) -> bool;

    fn node_filter(&self) -> Option<String>;

    fn partition_loss_policy(&self) -> String;

    fn partitions_count(&self) -> i32;

    fn rebalance_delay(&self) -> i64;

    fn rebalance_mode(&self) -> RebalanceMode;

    fn rebalance_order(&self) -> i32;

    fn topology_validator(&self) -> Option<String>;
}
