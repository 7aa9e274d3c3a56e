use super::entity::GiphyPage;
use crate::infrastructure::network::errors::DataTransferError;
use async_trait::async_trait;

#[async_trait]
pub trait TrendingGiphyRepository: Send + Sync {
    async fn fetch_trending_list(&self, limit: usize) -> Result<GiphyPage, DataTransferError>;
}
