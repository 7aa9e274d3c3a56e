use super::entity::FeedPage;
use crate::infrastructure::network::errors::DataTransferError;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait TrendingRepository: Send + Sync {
    async fn fetch_trending(&self, limit: usize, offset: usize)
    -> Result<FeedPage, DataTransferError>;
}

#[async_trait]
pub trait GifDataRepository: Send + Sync {
    /// Fetch the raw body behind an already fully-qualified media URL.
    async fn fetch_gif(&self, url: &str) -> Result<Bytes, DataTransferError>;
}
