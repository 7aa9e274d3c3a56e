use crate::domain::giphy::{entity::GiphyPage, repository::TrendingGiphyRepository};
use crate::infrastructure::network::errors::DataTransferError;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingGiphyRequest {
    pub limit: usize,
}

#[async_trait]
pub trait TrendingGiphyUseCase: Send + Sync {
    async fn execute(&self, request: TrendingGiphyRequest) -> Result<GiphyPage, DataTransferError>;
}

pub struct TrendingGiphyUseCaseLoader {
    repository: Arc<dyn TrendingGiphyRepository>,
}

impl TrendingGiphyUseCaseLoader {
    pub fn new(repository: Arc<dyn TrendingGiphyRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TrendingGiphyUseCase for TrendingGiphyUseCaseLoader {
    async fn execute(&self, request: TrendingGiphyRequest) -> Result<GiphyPage, DataTransferError> {
        self.repository.fetch_trending_list(request.limit).await
    }
}
