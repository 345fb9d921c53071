//! ListHotelsHandler - Query handler for the hotel inventory.

use std::sync::Arc;

use crate::domain::lodging::{Hotel, LodgingError};
use crate::ports::HotelReader;

/// Query to list every hotel.
#[derive(Debug, Clone, Default)]
pub struct ListHotelsQuery;

/// Result of a successful listing. Never empty.
pub type ListHotelsResult = Vec<Hotel>;

/// Handler for listing hotels.
///
/// An empty inventory is reported as `LodgingError::NoHotels` rather than an
/// empty list; clients of the platform depend on the 404.
pub struct ListHotelsHandler {
    reader: Arc<dyn HotelReader>,
}

impl ListHotelsHandler {
    pub fn new(reader: Arc<dyn HotelReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: ListHotelsQuery) -> Result<ListHotelsResult, LodgingError> {
        let hotels = self.reader.list_hotels().await?;
        if hotels.is_empty() {
            return Err(LodgingError::NoHotels);
        }
        Ok(hotels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryHotelStore;
    use crate::domain::foundation::{HotelId, Timestamp};

    fn hotel(id: i32) -> Hotel {
        Hotel {
            id: HotelId::from_db(id),
            name: "Ibis Hotel".to_string(),
            image: "https://example.com/ibis.png".to_string(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn returns_all_hotels() {
        let store = InMemoryHotelStore::new().with_hotel(hotel(1)).with_hotel(hotel(2));
        let handler = ListHotelsHandler::new(Arc::new(store));

        let hotels = handler.handle(ListHotelsQuery).await.unwrap();
        assert_eq!(hotels.len(), 2);
    }

    #[tokio::test]
    async fn empty_inventory_is_not_found() {
        let handler = ListHotelsHandler::new(Arc::new(InMemoryHotelStore::new()));

        let result = handler.handle(ListHotelsQuery).await;
        assert_eq!(result, Err(LodgingError::NoHotels));
    }

    #[tokio::test]
    async fn fails_when_reader_fails() {
        let store = InMemoryHotelStore::new().with_hotel(hotel(1)).with_error("down");
        let handler = ListHotelsHandler::new(Arc::new(store));

        let result = handler.handle(ListHotelsQuery).await;
        assert!(matches!(result, Err(LodgingError::Infrastructure(_))));
    }
}
