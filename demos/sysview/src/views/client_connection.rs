use std::net::SocketAddr;

/// Client connection representation for the system view.
pub trait ClientConnectionView {
    /// walker:order=0
    fn connection_id(&self) -> i64;

    /// walker:order=1
    fn local_address(&self) -> Option<SocketAddr>;

    /// walker:order=2
    fn remote_address(&self) -> Option<SocketAddr>;

    /// walker:order=3
    fn connection_type(&self) -> String;

    /// walker:order=4
    fn user(&self) -> Option<String>;

    /// walker:order=5
    fn version(&self) -> String;

    fn is_secure(&self) -> bool;

    fn to_string(&self) -> String;
}
