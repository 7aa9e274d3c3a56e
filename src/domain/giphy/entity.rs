use url::Url;

/// Trending item returned by the list-only endpoint variant.
///
/// Carries no uploader and takes its timestamp from `import_datetime`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Giphy {
    pub id: String,
    pub title: String,
    pub datetime: String,
    pub images: GiphyImages,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiphyImages {
    pub original: GiphyImageMetadata,
    pub small: GiphyImageMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiphyImageMetadata {
    pub height: String,
    pub width: String,
    pub url: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GiphyPage {
    pub total_count: usize,
    pub count: usize,
    pub offset: usize,
    pub items: Vec<Giphy>,
}
