//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Everything in this service is a read; there are no command handlers.

pub mod handlers;

pub use handlers::lodging::{
    GetHotelHandler, GetHotelQuery, ListHotelsHandler, ListHotelsQuery, ListHotelsResult,
};
pub use handlers::ticket::{CheckEligibilityHandler, CheckEligibilityQuery, CheckEligibilityResult};
