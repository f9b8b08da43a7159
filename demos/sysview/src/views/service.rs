use uuid::Uuid;

/// Deployed service representation for the system view.
pub struct ServiceView {
    id: Uuid,
    name: String,
    service_class: String,
    cache_name: Option<String>,
    origin_node_id: Uuid,
    total_count: i32,
    max_per_node_count: i32,
    statically_configured: bool,
    affinity_key: Option<String>,
    node_filter: Option<String>,
}

impl ServiceView {
    pub fn new(id: Uuid, name: String, service_class: String, origin_node_id: Uuid) -> Self {
        Self {
            id,
            name,
            service_class,
            cache_name: None,
            origin_node_id,
            total_count: 0,
            max_per_node_count: 0,
            statically_configured: false,
            affinity_key: None,
            node_filter: None,
        }
    }

    /// walker:order=0
    pub fn service_id(&self) -> Uuid {
        self.id
    }

    /// walker:order=1
    pub fn name(&self) -> &str {
        &self.name
    }

    /// walker:order=2
    pub fn service_class(&self) -> &str {
        &self.service_class
    }

    /// walker:order=3
    pub fn cache_name(&self) -> Option<&str> {
        self.cache_name.as_deref()
    }

    /// walker:order=4
    pub fn origin_node_id(&self) -> Uuid {
        self.origin_node_id
    }

    /// walker:order=5
    pub fn total_count(&self) -> i32 {
        self.total_count
    }

    /// walker:order=6
    pub fn max_per_node_count(&self) -> i32 {
        self.max_per_node_count
    }

    pub fn affinity_key(&self) -> Option<&str> {
        self.affinity_key.as_deref()
    }

    pub fn node_filter(&self) -> Option<&str> {
        self.node_filter.as_deref()
    }

    pub fn statically_configured(&self) -> bool {
        self.statically_configured
    }

    pub fn set_total_count(&mut self, total_count: i32) {
        self.total_count = total_count;
    }
}
