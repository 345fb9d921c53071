//! Lodging module - Hotels and their rooms.

mod errors;
mod hotel;

pub use errors::LodgingError;
pub use hotel::{Hotel, HotelWithRooms, Room};
