//! Response DTOs for hotel endpoints.
//!
//! Keys are camelCase to match the platform's wire format. The nested room
//! list is keyed `Rooms`, capitalised, as existing clients read it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::lodging::{Hotel, HotelWithRooms, Room};

/// A hotel as listed by `GET /hotels`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id.value(),
            name: hotel.name,
            image: hotel.image,
            created_at: *hotel.created_at.as_datetime(),
            updated_at: *hotel.updated_at.as_datetime(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.value(),
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id.value(),
            created_at: *room.created_at.as_datetime(),
            updated_at: *room.updated_at.as_datetime(),
        }
    }
}

/// A hotel with its rooms, as returned by `GET /hotels/:hotelId`.
#[derive(Debug, Clone, Serialize)]
pub struct HotelWithRoomsResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(found: HotelWithRooms) -> Self {
        Self {
            hotel: found.hotel.into(),
            rooms: found.rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}
