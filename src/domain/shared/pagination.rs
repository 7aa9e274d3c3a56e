/// Page window requested from the trending endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PaginationRequest {
    pub const DEFAULT_LIMIT: usize = 10;

    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Window following `loaded` already accumulated items.
    pub fn next(limit: usize, loaded: usize) -> Self {
        Self {
            limit,
            offset: loaded,
        }
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
