//! GetHotelHandler - Query handler for one hotel and its rooms.

use std::sync::Arc;

use crate::domain::foundation::HotelId;
use crate::domain::lodging::{HotelWithRooms, LodgingError};
use crate::ports::HotelReader;

/// Query to fetch a single hotel.
#[derive(Debug, Clone)]
pub struct GetHotelQuery {
    pub hotel_id: HotelId,
}

/// Handler for retrieving a hotel with its rooms.
pub struct GetHotelHandler {
    reader: Arc<dyn HotelReader>,
}

impl GetHotelHandler {
    pub fn new(reader: Arc<dyn HotelReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetHotelQuery) -> Result<HotelWithRooms, LodgingError> {
        self.reader
            .find_with_rooms(&query.hotel_id)
            .await?
            .ok_or(LodgingError::HotelNotFound(query.hotel_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryHotelStore;
    use crate::domain::foundation::{RoomId, Timestamp};
    use crate::domain::lodging::{Hotel, Room};

    fn store() -> InMemoryHotelStore {
        InMemoryHotelStore::new()
            .with_hotel(Hotel {
                id: HotelId::from_db(1),
                name: "Ibis Hotel".to_string(),
                image: "https://example.com/ibis.png".to_string(),
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            })
            .with_room(Room {
                id: RoomId::from_db(1),
                name: "Quarto Simples".to_string(),
                capacity: 2,
                hotel_id: HotelId::from_db(1),
                created_at: Timestamp::now(),
                updated_at: Timestamp::now(),
            })
    }

    #[tokio::test]
    async fn returns_hotel_with_rooms() {
        let handler = GetHotelHandler::new(Arc::new(store()));

        let found = handler
            .handle(GetHotelQuery { hotel_id: HotelId::from_db(1) })
            .await
            .unwrap();
        assert_eq!(found.hotel.name, "Ibis Hotel");
        assert_eq!(found.rooms.len(), 1);
        assert_eq!(found.rooms[0].capacity, 2);
    }

    #[tokio::test]
    async fn unknown_hotel_is_not_found() {
        let handler = GetHotelHandler::new(Arc::new(store()));

        let result = handler
            .handle(GetHotelQuery { hotel_id: HotelId::from_db(42) })
            .await;
        assert_eq!(result, Err(LodgingError::HotelNotFound(HotelId::from_db(42))));
    }

    #[tokio::test]
    async fn fails_when_reader_fails() {
        let handler = GetHotelHandler::new(Arc::new(store().with_error("timeout")));

        let result = handler
            .handle(GetHotelQuery { hotel_id: HotelId::from_db(1) })
            .await;
        assert!(matches!(result, Err(LodgingError::Infrastructure(_))));
    }
}
