pub mod dto;
pub mod network;
pub mod repositories;
