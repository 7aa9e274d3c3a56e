use url::Url;

/// One trending item as the rest of the crate sees it.
///
/// Values are produced by mapping the wire DTOs and are never mutated
/// afterwards. Equality is structural.
///
/// # Invariants
/// - `id` is opaque and assigned by the server
/// - `datetime` is the raw `YYYY-MM-dd HH:mm:ss` timestamp, possibly empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    /// Server-assigned identifier
    pub id: String,

    /// Human-readable title, may be empty
    pub title: String,

    /// Raw trending (or import) timestamp
    pub datetime: String,

    /// Rendition metadata for the item
    pub images: FeedImages,

    /// Uploader, absent for anonymous uploads
    pub user: Option<FeedUser>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedImages {
    pub original: FeedImageMetadata,
    pub small: FeedImageMetadata,
}

/// Dimensions stay strings because the API sends them that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedImageMetadata {
    pub height: String,
    pub width: String,
    pub url: Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUser {
    pub username: String,
    pub display_name: String,
}

/// One fetched batch of items plus the pagination metadata of its response.
///
/// `count` is what the response reported, which is not necessarily
/// `items.len()`. `offset` identifies the page when pages are merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedPage {
    pub total_count: usize,
    pub count: usize,
    pub offset: usize,
    pub items: Vec<Feed>,
}

impl FeedPage {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
