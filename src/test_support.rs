//! Shared doubles for unit tests.

use crate::infrastructure::network::config::NetworkConfig;
use crate::infrastructure::network::endpoint::Requestable;
use crate::infrastructure::network::errors::NetworkError;
use crate::infrastructure::network::network_service::NetworkService;
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::VecDeque;
use url::Url;

/// Transport double that resolves URLs like the real one and replays queued results.
pub struct StubNetwork {
    config: NetworkConfig,
    responses: Mutex<VecDeque<Result<Option<Bytes>, NetworkError>>>,
    requested: Mutex<Vec<Url>>,
}

impl StubNetwork {
    pub fn new() -> Self {
        let base_url = Url::parse("https://api.giphy.com").expect("static URL");
        Self {
            config: NetworkConfig::new(base_url).with_query_parameter("api_key", "test-key"),
            responses: Mutex::new(VecDeque::new()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn respond_with(self, result: Result<Option<Bytes>, NetworkError>) -> Self {
        self.responses.lock().push_back(result);
        self
    }

    pub fn respond_with_body(self, body: &'static str) -> Self {
        self.respond_with(Ok(Some(Bytes::from_static(body.as_bytes()))))
    }

    pub fn requested_urls(&self) -> Vec<Url> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl NetworkService for StubNetwork {
    async fn request(&self, endpoint: &dyn Requestable) -> Result<Option<Bytes>, NetworkError> {
        let url = endpoint.url(&self.config)?;
        self.requested.lock().push(url);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or(Err(NetworkError::Unknown))
    }
}

pub fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

pub const TRENDING_BODY: &str = r#"{
    "data": [
        {
            "id": "first",
            "title": "First",
            "trending_datetime": "2021-05-21 19:17:34",
            "images": {
                "original": { "height": "480", "width": "480", "url": "https://media.giphy.com/first/giphy.gif" },
                "fixed_width_small": { "height": "100", "width": "100", "url": "https://media.giphy.com/first/100w.gif" }
            },
            "user": { "username": "one", "display_name": "One" }
        },
        {
            "id": "second",
            "title": "Second",
            "import_datetime": "2020-01-01 00:00:00",
            "images": {
                "original": { "height": "480", "width": "480", "url": "https://media.giphy.com/second/giphy.gif" },
                "fixed_width_small": { "height": "100", "width": "100", "url": "https://media.giphy.com/second/100w.gif" }
            }
        }
    ],
    "pagination": { "total_count": 40, "count": 2, "offset": 20 }
}"#;
