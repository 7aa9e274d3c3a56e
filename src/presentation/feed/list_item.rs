use super::formatting::FeedItemFormatter;
use crate::domain::feed::entity::{Feed, FeedImages};
use crate::domain::feed::repository::GifDataRepository;
use crate::domain::shared::cancellable::Cancellable;
use crate::infrastructure::repositories::repository_task::RepositoryTask;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

pub type GifDataHandler = Arc<dyn Fn(Bytes) + Send + Sync>;

/// Display-ready row for one feed item.
///
/// Rows compare equal when their ids match. Dropping a row cancels its
/// pending GIF request.
pub struct FeedListItemViewModel {
    pub id: String,
    pub title: String,
    pub trending_date_time: Option<String>,
    pub author_name: Option<String>,
    pub images: FeedImages,
    gif_data_repository: Arc<dyn GifDataRepository>,
    gif_data: Arc<Mutex<Option<GifDataHandler>>>,
    gif_request: Mutex<Option<RepositoryTask>>,
}

impl FeedListItemViewModel {
    pub fn new(
        feed: &Feed,
        now: DateTime<Utc>,
        formatter: &dyn FeedItemFormatter,
        gif_data_repository: Arc<dyn GifDataRepository>,
    ) -> Self {
        Self {
            id: feed.id.clone(),
            title: feed.title.clone(),
            trending_date_time: formatter.trending_date_time(&feed.datetime, now),
            author_name: formatter.author_name(feed.user.as_ref()),
            images: feed.images.clone(),
            gif_data_repository,
            gif_data: Arc::new(Mutex::new(None)),
            gif_request: Mutex::new(None),
        }
    }

    /// Install the callback that receives downloaded GIF bytes.
    pub fn set_gif_data_handler(&self, handler: impl Fn(Bytes) + Send + Sync + 'static) {
        *self.gif_data.lock() = Some(Arc::new(handler));
    }

    /// Start downloading the small rendition, replacing any pending download.
    pub fn did_request_gif(&self) {
        let repository = Arc::clone(&self.gif_data_repository);
        let url = self.images.small.url.to_string();
        let handler = Arc::clone(&self.gif_data);
        let id = self.id.clone();

        let task = RepositoryTask::spawn(
            async move { repository.fetch_gif(&url).await },
            move |result| match result {
                Ok(data) => {
                    let handler = handler.lock().clone();
                    match handler {
                        Some(handler) => handler(data),
                        None => debug!(id = %id, "gif loaded without a handler"),
                    }
                }
                Err(err) => warn!(id = %id, error = %err, "gif request failed"),
            },
        );

        if let Some(previous) = self.gif_request.lock().replace(task) {
            previous.cancel();
        }
    }

    /// Cancel the pending download and forget the data handler.
    pub fn did_cancel_gif_request(&self) {
        if let Some(task) = self.gif_request.lock().take() {
            task.cancel();
        }
        *self.gif_data.lock() = None;
    }

    pub fn has_pending_gif_request(&self) -> bool {
        self.gif_request
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished() && !task.is_cancelled())
    }
}

impl Drop for FeedListItemViewModel {
    fn drop(&mut self) {
        if let Some(task) = self.gif_request.get_mut().take() {
            task.cancel();
        }
    }
}

impl PartialEq for FeedListItemViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FeedListItemViewModel {}

impl fmt::Debug for FeedListItemViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedListItemViewModel")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("trending_date_time", &self.trending_date_time)
            .field("author_name", &self.author_name)
            .finish_non_exhaustive()
    }
}
