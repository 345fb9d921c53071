//! Hotel reader port (read side).
//!
//! # Example
//!
//! ```ignore
//! async fn show_hotel(reader: &dyn HotelReader, id: HotelId) -> Option<String> {
//!     let found = reader.find_with_rooms(&id).await.ok()??;
//!     Some(format!("{} ({} rooms)", found.hotel.name, found.rooms.len()))
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HotelId};
use crate::domain::lodging::{Hotel, HotelWithRooms};

/// Reader port for hotel inventory.
#[async_trait]
pub trait HotelReader: Send + Sync {
    /// List every hotel. An empty inventory is `Ok(vec![])` at this level;
    /// deciding what that means is the application's job.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError>;

    /// Fetch one hotel together with its rooms.
    ///
    /// Returns `None` if no hotel has this id.
    async fn find_with_rooms(&self, hotel_id: &HotelId)
        -> Result<Option<HotelWithRooms>, DomainError>;
}
