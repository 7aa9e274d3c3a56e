use crate::domain::feed::repository::GifDataRepository;
use crate::infrastructure::network::data_transfer_service::{
    DataTransferService, DataTransferServiceLoader,
};
use crate::infrastructure::network::decoder::RawDataResponseDecoder;
use crate::infrastructure::network::endpoint::{Endpoint, HttpMethod};
use crate::infrastructure::network::errors::DataTransferError;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

pub struct GifDataRepositoryLoader<D = DataTransferServiceLoader> {
    data_transfer_service: Arc<D>,
}

impl<D> GifDataRepositoryLoader<D> {
    pub fn new(data_transfer_service: Arc<D>) -> Self {
        Self {
            data_transfer_service,
        }
    }
}

#[async_trait]
impl<D: DataTransferService + 'static> GifDataRepository for GifDataRepositoryLoader<D> {
    async fn fetch_gif(&self, url: &str) -> Result<Bytes, DataTransferError> {
        debug!(url, "fetching gif data");
        let endpoint = Endpoint::full_path(url, HttpMethod::Get, RawDataResponseDecoder);
        self.data_transfer_service.request(&endpoint).await
    }
}
