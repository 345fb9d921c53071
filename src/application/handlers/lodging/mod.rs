//! Lodging handlers.
//!
//! ## Queries
//! - List hotels
//! - Get a hotel with its rooms

mod get_hotel;
mod list_hotels;

pub use get_hotel::{GetHotelHandler, GetHotelQuery};
pub use list_hotels::{ListHotelsHandler, ListHotelsQuery, ListHotelsResult};
