use super::endpoint::ResponseRequestable;
use super::errors::DataTransferError;
use super::network_service::NetworkService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Bridges the transport to typed values.
#[async_trait]
pub trait DataTransferService: Send + Sync {
    async fn request<E>(&self, endpoint: &E) -> Result<E::Response, DataTransferError>
    where
        E: ResponseRequestable + 'static,
        E::Response: Send;
}

pub struct DataTransferServiceLoader {
    network_service: Arc<dyn NetworkService>,
}

impl DataTransferServiceLoader {
    pub fn new(network_service: Arc<dyn NetworkService>) -> Self {
        Self { network_service }
    }
}

#[async_trait]
impl DataTransferService for DataTransferServiceLoader {
    async fn request<E>(&self, endpoint: &E) -> Result<E::Response, DataTransferError>
    where
        E: ResponseRequestable + 'static,
        E::Response: Send,
    {
        let body = self.network_service.request(endpoint).await?;
        let Some(data) = body else {
            warn!(path = endpoint.path(), "response carried no body");
            return Err(DataTransferError::NoResponse);
        };
        endpoint.response_decoder().decode(&data).map_err(|err| {
            warn!(path = endpoint.path(), error = %err, "response decoding failed");
            DataTransferError::Parsing(err)
        })
    }
}
