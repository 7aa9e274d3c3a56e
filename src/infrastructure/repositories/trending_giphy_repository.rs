use super::trending_repository::{CONTENT_RATING, TRENDING_PATH};
use crate::domain::giphy::{entity::GiphyPage, repository::TrendingGiphyRepository};
use crate::infrastructure::dto::giphy_response::GiphyResponseDto;
use crate::infrastructure::network::data_transfer_service::{
    DataTransferService, DataTransferServiceLoader,
};
use crate::infrastructure::network::decoder::JsonResponseDecoder;
use crate::infrastructure::network::endpoint::{Endpoint, HttpMethod};
use crate::infrastructure::network::errors::DataTransferError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// List-only variant of the trending fetch; always starts at the first item.
pub struct GiphyTrendingRepository<D = DataTransferServiceLoader> {
    data_transfer_service: Arc<D>,
}

impl<D> GiphyTrendingRepository<D> {
    pub fn new(data_transfer_service: Arc<D>) -> Self {
        Self {
            data_transfer_service,
        }
    }
}

#[async_trait]
impl<D: DataTransferService + 'static> TrendingGiphyRepository for GiphyTrendingRepository<D> {
    async fn fetch_trending_list(&self, limit: usize) -> Result<GiphyPage, DataTransferError> {
        debug!(limit, "fetching trending list");
        let endpoint: Endpoint<GiphyResponseDto> =
            Endpoint::new(TRENDING_PATH, HttpMethod::Get, JsonResponseDecoder::new())
                .with_query_parameter("limit", limit)
                .with_query_parameter("rating", CONTENT_RATING);
        let response = self.data_transfer_service.request(&endpoint).await?;
        Ok(response.into_domain())
    }
}
