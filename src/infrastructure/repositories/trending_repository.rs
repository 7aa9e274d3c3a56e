use crate::domain::feed::{entity::FeedPage, repository::TrendingRepository};
use crate::infrastructure::dto::feed_response::FeedResponseDto;
use crate::infrastructure::network::data_transfer_service::{
    DataTransferService, DataTransferServiceLoader,
};
use crate::infrastructure::network::decoder::JsonResponseDecoder;
use crate::infrastructure::network::endpoint::{Endpoint, HttpMethod};
use crate::infrastructure::network::errors::DataTransferError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

pub const TRENDING_PATH: &str = "/v1/gifs/trending";

/// Content rating filter sent with every trending request.
pub const CONTENT_RATING: &str = "g";

pub struct TrendingRepositoryLoader<D = DataTransferServiceLoader> {
    data_transfer_service: Arc<D>,
}

impl<D> TrendingRepositoryLoader<D> {
    pub fn new(data_transfer_service: Arc<D>) -> Self {
        Self {
            data_transfer_service,
        }
    }
}

fn trending_endpoint(limit: usize, offset: usize) -> Endpoint<FeedResponseDto> {
    Endpoint::new(TRENDING_PATH, HttpMethod::Get, JsonResponseDecoder::new())
        .with_query_parameter("limit", limit)
        .with_query_parameter("offset", offset)
        .with_query_parameter("rating", CONTENT_RATING)
}

#[async_trait]
impl<D: DataTransferService + 'static> TrendingRepository for TrendingRepositoryLoader<D> {
    async fn fetch_trending(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<FeedPage, DataTransferError> {
        debug!(limit, offset, "fetching trending page");
        let endpoint = trending_endpoint(limit, offset);
        let response = self.data_transfer_service.request(&endpoint).await?;
        Ok(response.into_domain())
    }
}
