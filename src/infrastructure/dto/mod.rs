pub mod feed_response;
pub mod giphy_response;
