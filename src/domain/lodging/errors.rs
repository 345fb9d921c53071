//! Hotel lookup error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, HotelId};

/// Failures of the hotel lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LodgingError {
    /// The hotel inventory is empty. Reported as absence, not as an empty list.
    #[error("No hotels available")]
    NoHotels,

    /// No hotel has the requested id.
    #[error("Hotel not found: {0}")]
    HotelNotFound(HotelId),

    /// The path segment is not a usable hotel id, so nothing can match it.
    #[error("Hotel not found: {0}")]
    UnknownHotelRef(String),

    /// Storage fault during lookup.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl LodgingError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        LodgingError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            LodgingError::NoHotels
            | LodgingError::HotelNotFound(_)
            | LodgingError::UnknownHotelRef(_) => ErrorCode::HotelNotFound,
            LodgingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for LodgingError {
    fn from(err: DomainError) -> Self {
        LodgingError::Infrastructure(err.to_string())
    }
}
