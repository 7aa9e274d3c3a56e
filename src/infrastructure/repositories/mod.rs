pub mod gif_data_repository;
pub mod repository_task;
pub mod trending_giphy_repository;
pub mod trending_repository;
