pub mod config;
pub mod data_transfer_service;
pub mod decoder;
pub mod endpoint;
pub mod errors;
pub mod network_service;
