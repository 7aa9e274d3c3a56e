use std::collections::BTreeMap;
use url::Url;

/// Base settings shared by every request the transport issues.
///
/// Built once at composition time and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub base_url: Url,
    pub headers: BTreeMap<String, String>,
    pub query_parameters: BTreeMap<String, String>,
}

impl NetworkConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            headers: BTreeMap::new(),
            query_parameters: BTreeMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_query_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters.insert(key.into(), value.into());
        self
    }
}
