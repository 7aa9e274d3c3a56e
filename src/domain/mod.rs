pub mod feed;
pub mod giphy;
pub mod shared;
