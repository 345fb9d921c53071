//! HTTP adapter for the hotel listing endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{HotelResponse, HotelWithRoomsResponse, RoomResponse};
pub use handlers::{get_hotel, list_hotels, HotelAppState};
pub use routes::{hotel_router, hotel_routes};
