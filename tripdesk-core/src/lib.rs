pub mod booking;
pub mod opening;
pub mod repository;
pub mod search;

pub use booking::{BookingRequest, Reservation, UserProfile};
pub use opening::Opening;
pub use search::{ResponseStatus, SearchParams, SearchRequest, SearchResponse};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
