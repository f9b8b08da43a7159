pub mod cache;
pub mod cache_group;
pub mod client_connection;
pub mod compute_task;
pub mod service;
