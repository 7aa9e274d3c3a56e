use crate::domain::shared::pagination::PaginationRequest;

/// Request value accepted by the trending use case.
pub type TrendingUseCaseRequest = PaginationRequest;
