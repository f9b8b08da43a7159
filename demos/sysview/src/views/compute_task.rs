use std::time::SystemTime;
use uuid::Uuid;

/// Running compute task representation for the system view.
pub trait ComputeTaskView {
    /// walker:order=0
    fn id(&self) -> Uuid;

    /// walker:order=1
    fn session_id(&self) -> Uuid;

    /// walker:order=2
    fn task_node_id(&self) -> Uuid;

    /// walker:order=3
    fn task_name(&self) -> String;

    /// walker:order=4
    fn task_class_name(&self) -> String;

    /// walker:order=5
    fn affinity_partition_id(&self) -> i32;

    /// walker:order=6
    fn affinity_cache_name(&self) -> Option<String>;

    /// walker:order=7
    fn start_time(&self) -> SystemTime;

    /// walker:order=8
    fn end_time(&self) -> Option<SystemTime>;

    /// walker:order=9
    fn exec_name(&self) -> Option<String>;

    /// walker:order=10
    fn internal(&self) -> bool;

    /// walker:order=11
    fn user_version(&self) -> String;

    fn job_id(&self) -> Option<Uuid>;

    fn cancel(&self);
}
