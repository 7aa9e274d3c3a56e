//! Error taxonomy of the request pipeline.
//!
//! [`NetworkError`] is produced only by the transport. [`DataTransferError`]
//! wraps it together with the decode-level failures and is what repositories,
//! use cases and the presentation layer see.

use crate::domain::shared::connection_error::ConnectionError;
use bytes::Bytes;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum NetworkError {
    /// A response arrived but the exchange failed, typically a non-2xx status.
    #[error("HTTP status {status_code}")]
    HttpStatus {
        status_code: u16,
        body: Option<Bytes>,
    },
    #[error("Not connected to the internet")]
    NotConnected,
    #[error("Request cancelled")]
    Cancelled,
    #[error("Transport error: {0}")]
    Generic(#[source] BoxError),
    #[error("Failed to build request URL")]
    UrlGenerationFailed(#[from] RequestGenerationError),
    #[error("Unknown network error")]
    Unknown,
}

#[derive(Debug, Error)]
pub enum RequestGenerationError {
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid header `{0}`")]
    InvalidHeader(String),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DataTransferError {
    #[error("Response carried no body")]
    NoResponse,
    #[error("Failed to decode response: {0}")]
    Parsing(#[source] DecodeError),
    #[error("Network error: {0}")]
    NetworkError(#[source] NetworkError),
}

impl From<NetworkError> for DataTransferError {
    fn from(err: NetworkError) -> Self {
        Self::NetworkError(err)
    }
}

impl From<DecodeError> for DataTransferError {
    fn from(err: DecodeError) -> Self {
        Self::Parsing(err)
    }
}

impl ConnectionError for NetworkError {
    fn is_internet_connection_error(&self) -> bool {
        matches!(self, Self::NotConnected)
    }
}

impl ConnectionError for DataTransferError {
    fn is_internet_connection_error(&self) -> bool {
        match self {
            Self::NetworkError(err) => err.is_internet_connection_error(),
            Self::NoResponse | Self::Parsing(_) => false,
        }
    }
}
