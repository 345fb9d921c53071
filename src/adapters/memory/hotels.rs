//! In-memory hotel inventory.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, HotelId};
use crate::domain::lodging::{Hotel, HotelWithRooms, Room};
use crate::ports::HotelReader;

#[derive(Debug, Default)]
struct Inventory {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
}

/// In-memory implementation of the `HotelReader` port.
///
/// Rooms are stored flat and joined on read by `hotel_id`, like the table
/// they stand in for.
#[derive(Debug, Default)]
pub struct InMemoryHotelStore {
    inventory: RwLock<Inventory>,
    force_error: RwLock<Option<String>>,
}

impl InMemoryHotelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hotel(self, hotel: Hotel) -> Self {
        self.add_hotel(hotel);
        self
    }

    pub fn with_room(self, room: Room) -> Self {
        self.add_room(room);
        self
    }

    /// Forces every read to fail with a database error.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(message.into());
        self
    }

    pub fn add_hotel(&self, hotel: Hotel) {
        self.inventory
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .hotels
            .push(hotel);
    }

    pub fn add_room(&self, room: Room) {
        self.inventory
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .rooms
            .push(room);
    }

    fn check_forced_error(&self) -> Result<(), DomainError> {
        match self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(message) => Err(DomainError::new(ErrorCode::DatabaseError, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl HotelReader for InMemoryHotelStore {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError> {
        self.check_forced_error()?;
        Ok(self
            .inventory
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .hotels
            .clone())
    }

    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        self.check_forced_error()?;
        let inventory = self
            .inventory
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let Some(hotel) = inventory.hotels.iter().find(|h| &h.id == hotel_id).cloned() else {
            return Ok(None);
        };
        let rooms = inventory
            .rooms
            .iter()
            .filter(|r| &r.hotel_id == hotel_id)
            .cloned()
            .collect();

        Ok(Some(HotelWithRooms::new(hotel, rooms)))
    }
}
