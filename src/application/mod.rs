pub mod trending_feed;
pub mod trending_giphy;
