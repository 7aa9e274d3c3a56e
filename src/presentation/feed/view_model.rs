//! Paginated trending feed controller.
//!
//! The view model owns the loaded pages and derives display rows from them.
//! Loaded pages are keyed by their offset: a page returned for an offset that
//! is already loaded replaces the stored one. The next request always starts
//! after the accumulated item count.

use super::clock::{Clock, SystemClock};
use super::formatting::{DefaultFeedItemFormatter, FeedItemFormatter};
use super::list_item::FeedListItemViewModel;
use super::observable::Observable;
use crate::application::trending_feed::dto::TrendingUseCaseRequest;
use crate::application::trending_feed::use_case::TrendingUseCase;
use crate::domain::feed::entity::FeedPage;
use crate::domain::feed::repository::GifDataRepository;
use crate::domain::shared::cancellable::Cancellable;
use crate::domain::shared::connection_error::ConnectionError;
use crate::domain::shared::pagination::PaginationRequest;
use crate::infrastructure::network::errors::DataTransferError;
use crate::infrastructure::repositories::repository_task::RepositoryTask;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

pub const NO_INTERNET_CONNECTION: &str = "No internet connection";
pub const FAILED_TO_LOAD_FEED: &str = "Failed to load feed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedViewModelState {
    #[default]
    None,
    Loading,
    NextPage,
}

pub type FeedItems = Vec<Arc<FeedListItemViewModel>>;

pub struct FeedViewModelOptions {
    pub page_size: usize,
    pub clock: Arc<dyn Clock>,
    pub formatter: Arc<dyn FeedItemFormatter>,
}

impl Default for FeedViewModelOptions {
    fn default() -> Self {
        Self {
            page_size: PaginationRequest::DEFAULT_LIMIT,
            clock: Arc::new(SystemClock),
            formatter: Arc::new(DefaultFeedItemFormatter),
        }
    }
}

#[derive(Default)]
struct Pagination {
    total_count: usize,
    count: usize,
    offset: usize,
    pages: Vec<FeedPage>,
    generation: u64,
    request: Option<RepositoryTask>,
}

impl Pagination {
    fn loaded_count(&self) -> usize {
        self.pages.iter().map(FeedPage::len).sum()
    }

    fn has_more_pages(&self) -> bool {
        self.loaded_count() < self.total_count
    }

    fn append_page(&mut self, page: FeedPage) {
        self.total_count = page.total_count;
        self.count = page.count;
        self.offset = page.offset;
        self.pages.retain(|loaded| loaded.offset != page.offset);
        self.pages.push(page);
    }

    fn reset(&mut self) {
        self.total_count = 0;
        self.count = 0;
        self.offset = 0;
        self.pages.clear();
    }
}

struct Shared {
    use_case: Arc<dyn TrendingUseCase>,
    gif_data_repository: Arc<dyn GifDataRepository>,
    options: FeedViewModelOptions,
    pagination: Mutex<Pagination>,
    items: Observable<FeedItems>,
    error: Observable<String>,
    state: Observable<FeedViewModelState>,
}

impl Shared {
    fn complete(&self, generation: u64, result: Result<FeedPage, DataTransferError>) {
        let mut pagination = self.pagination.lock();
        if pagination.generation != generation {
            debug!(generation, "discarding stale feed response");
            return;
        }
        pagination.request = None;

        match result {
            Ok(page) => {
                debug!(
                    offset = page.offset,
                    items = page.len(),
                    total_count = page.total_count,
                    "feed page loaded"
                );
                pagination.append_page(page);
                self.items.set(self.make_items(&pagination.pages));
            }
            Err(err) => {
                warn!(error = %err, "feed request failed");
                self.error.set(error_message(&err).to_string());
            }
        }
        self.state.set(FeedViewModelState::None);
    }

    fn make_items(&self, pages: &[FeedPage]) -> FeedItems {
        let now = self.options.clock.now();
        pages
            .iter()
            .flat_map(|page| page.items.iter())
            .map(|feed| {
                Arc::new(FeedListItemViewModel::new(
                    feed,
                    now,
                    self.options.formatter.as_ref(),
                    Arc::clone(&self.gif_data_repository),
                ))
            })
            .collect()
    }
}

/// User-facing message for a failed feed load.
pub fn error_message(err: &impl ConnectionError) -> &'static str {
    if err.is_internet_connection_error() {
        NO_INTERNET_CONNECTION
    } else {
        FAILED_TO_LOAD_FEED
    }
}

/// Must be driven from within a Tokio runtime.
#[derive(Clone)]
pub struct FeedViewModel {
    shared: Arc<Shared>,
}

impl FeedViewModel {
    pub fn new(
        use_case: Arc<dyn TrendingUseCase>,
        gif_data_repository: Arc<dyn GifDataRepository>,
    ) -> Self {
        Self::with_options(use_case, gif_data_repository, FeedViewModelOptions::default())
    }

    pub fn with_options(
        use_case: Arc<dyn TrendingUseCase>,
        gif_data_repository: Arc<dyn GifDataRepository>,
        options: FeedViewModelOptions,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                use_case,
                gif_data_repository,
                options,
                pagination: Mutex::new(Pagination::default()),
                items: Observable::new(Vec::new()),
                error: Observable::new(String::new()),
                state: Observable::new(FeedViewModelState::None),
            }),
        }
    }

    pub fn items(&self) -> &Observable<FeedItems> {
        &self.shared.items
    }

    pub fn error(&self) -> &Observable<String> {
        &self.shared.error
    }

    pub fn state(&self) -> &Observable<FeedViewModelState> {
        &self.shared.state
    }

    pub fn total_count(&self) -> usize {
        self.shared.pagination.lock().total_count
    }

    pub fn loaded_count(&self) -> usize {
        self.shared.pagination.lock().loaded_count()
    }

    pub fn page_count(&self) -> usize {
        self.shared.pagination.lock().pages.len()
    }

    pub fn has_more_pages(&self) -> bool {
        self.shared.pagination.lock().has_more_pages()
    }

    pub fn view_did_load(&self) {
        self.load_feed(FeedViewModelState::Loading);
    }

    /// Request the page after the loaded items.
    ///
    /// Ignored while another load is in flight or when everything is loaded.
    pub fn did_load_next_page(&self) {
        let pagination = self.shared.pagination.lock();
        if self.shared.state.get() != FeedViewModelState::None {
            debug!("next page ignored while a load is in flight");
            return;
        }
        if !pagination.has_more_pages() {
            debug!(
                loaded = pagination.loaded_count(),
                total_count = pagination.total_count,
                "next page ignored, feed fully loaded"
            );
            return;
        }
        drop(pagination);
        self.load_feed(FeedViewModelState::NextPage);
    }

    /// Drop all loaded pages and fetch the first page again.
    pub fn did_refresh_feed(&self) {
        {
            let mut pagination = self.shared.pagination.lock();
            pagination.reset();
            self.shared.items.set(Vec::new());
        }
        info!("refreshing feed");
        self.load_feed(FeedViewModelState::Loading);
    }

    fn load_feed(&self, state: FeedViewModelState) {
        let mut pagination = self.shared.pagination.lock();
        let page_size = self.shared.options.page_size;
        let request = match state {
            FeedViewModelState::NextPage => {
                TrendingUseCaseRequest::next(page_size, pagination.loaded_count())
            }
            FeedViewModelState::None | FeedViewModelState::Loading => {
                TrendingUseCaseRequest::new(page_size, 0)
            }
        };

        if let Some(previous) = pagination.request.take() {
            previous.cancel();
        }
        pagination.generation += 1;
        let generation = pagination.generation;
        self.shared.state.set(state);
        debug!(limit = request.limit, offset = request.offset, generation, "loading feed");

        let use_case = Arc::clone(&self.shared.use_case);
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let task = RepositoryTask::spawn(
            async move { use_case.execute(request).await },
            move |result| {
                if let Some(shared) = shared.upgrade() {
                    shared.complete(generation, result);
                }
            },
        );
        pagination.request = Some(task);
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        if let Some(task) = self.pagination.get_mut().request.take() {
            task.cancel();
        }
    }
}
