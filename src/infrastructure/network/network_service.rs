//! Reqwest-backed transport.
//!
//! The transport owns request execution and error classification only. It
//! issues exactly one attempt per call; retry policy belongs to callers.

use super::config::NetworkConfig;
use super::endpoint::{RequestDescriptor, Requestable};
use super::errors::{BoxError, NetworkError};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::io;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait NetworkService: Send + Sync {
    /// Execute the request described by `endpoint`.
    ///
    /// `Ok(None)` means the exchange succeeded without a body.
    async fn request(&self, endpoint: &dyn Requestable) -> Result<Option<Bytes>, NetworkError>;
}

/// Status and body of a response that reached the client.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<Bytes>,
}

/// Transport-level failure, reduced to the OS signals classification cares about.
#[derive(Debug)]
pub enum TransportFailure {
    NotConnected,
    Cancelled,
    Other(BoxError),
}

/// Raw result of one exchange before classification.
#[derive(Debug)]
pub struct TransportOutcome {
    pub response: Option<HttpResponse>,
    pub failure: Option<TransportFailure>,
}

/// Map a raw exchange onto the [`NetworkError`] taxonomy.
///
/// A response that reached the client always wins over the OS-level signal:
/// any failure with a response present becomes [`NetworkError::HttpStatus`].
pub fn classify(outcome: TransportOutcome) -> Result<Option<Bytes>, NetworkError> {
    match outcome {
        TransportOutcome {
            failure: Some(failure),
            response,
        } => Err(match response {
            Some(response) => NetworkError::HttpStatus {
                status_code: response.status,
                body: response.body,
            },
            None => match failure {
                TransportFailure::NotConnected => NetworkError::NotConnected,
                TransportFailure::Cancelled => NetworkError::Cancelled,
                TransportFailure::Other(cause) => NetworkError::Generic(cause),
            },
        }),
        TransportOutcome {
            failure: None,
            response:
                Some(HttpResponse {
                    body: Some(body), ..
                }),
        } => Ok(Some(body)),
        _ => Err(NetworkError::Unknown),
    }
}

pub struct NetworkServiceLoader {
    config: NetworkConfig,
    client: Client,
}

impl NetworkServiceLoader {
    /// Build a transport with its own client and an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: NetworkConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: NetworkConfig, client: Client) -> Self {
        Self { config, client }
    }

    async fn perform(&self, request: RequestDescriptor) -> TransportOutcome {
        let response = match self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                return TransportOutcome {
                    response: None,
                    failure: Some(resolve_failure(err)),
                };
            }
        };

        let status = response.status();
        match response.bytes().await {
            Ok(body) if status.is_success() => TransportOutcome {
                response: Some(HttpResponse {
                    status: status.as_u16(),
                    body: Some(body),
                }),
                failure: None,
            },
            Ok(body) => TransportOutcome {
                response: Some(HttpResponse {
                    status: status.as_u16(),
                    body: Some(body),
                }),
                failure: Some(TransportFailure::Other(
                    format!("unsuccessful status {status}").into(),
                )),
            },
            Err(err) => TransportOutcome {
                response: Some(HttpResponse {
                    status: status.as_u16(),
                    body: None,
                }),
                failure: Some(resolve_failure(err)),
            },
        }
    }
}

#[async_trait]
impl NetworkService for NetworkServiceLoader {
    async fn request(&self, endpoint: &dyn Requestable) -> Result<Option<Bytes>, NetworkError> {
        let request = endpoint.url_request(&self.config).map_err(|err| {
            warn!(path = endpoint.path(), error = %err, "request generation failed");
            NetworkError::from(err)
        })?;

        // The query string carries the API key, so only the path is logged.
        debug!(method = %request.method, path = request.url.path(), "sending request");
        let result = classify(self.perform(request).await);
        match &result {
            Ok(body) => debug!(
                path = endpoint.path(),
                bytes = body.as_ref().map_or(0, Bytes::len),
                "request succeeded"
            ),
            Err(err) => warn!(path = endpoint.path(), error = %err, "request failed"),
        }
        result
    }
}

fn resolve_failure(err: reqwest::Error) -> TransportFailure {
    if err.is_connect() {
        return TransportFailure::NotConnected;
    }
    match io_error_kind(&err) {
        Some(io::ErrorKind::NotConnected) => TransportFailure::NotConnected,
        Some(io::ErrorKind::Interrupted | io::ErrorKind::ConnectionAborted) => {
            TransportFailure::Cancelled
        }
        _ => TransportFailure::Other(Box::new(err)),
    }
}

fn io_error_kind(err: &(dyn std::error::Error + 'static)) -> Option<io::ErrorKind> {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            return Some(io_err.kind());
        }
        source = cause.source();
    }
    None
}
