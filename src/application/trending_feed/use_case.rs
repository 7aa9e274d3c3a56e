use super::dto::TrendingUseCaseRequest;
use crate::domain::feed::{entity::FeedPage, repository::TrendingRepository};
use crate::infrastructure::network::errors::DataTransferError;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrendingUseCase: Send + Sync {
    async fn execute(&self, request: TrendingUseCaseRequest) -> Result<FeedPage, DataTransferError>;
}

pub struct TrendingUseCaseLoader {
    repository: Arc<dyn TrendingRepository>,
}

impl TrendingUseCaseLoader {
    pub fn new(repository: Arc<dyn TrendingRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TrendingUseCase for TrendingUseCaseLoader {
    async fn execute(&self, request: TrendingUseCaseRequest) -> Result<FeedPage, DataTransferError> {
        self.repository
            .fetch_trending(request.limit, request.offset)
            .await
    }
}
