pub mod cancellable;
pub mod connection_error;
pub mod pagination;
