//! PostgreSQL implementation of HotelReader.
//!
//! Provides read-optimized queries for the hotel inventory.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, HotelId, RoomId};
use crate::domain::lodging::{Hotel, HotelWithRooms, Room};
use crate::ports::HotelReader;

use super::from_db_timestamp;

/// PostgreSQL implementation of the HotelReader port.
#[derive(Clone)]
pub struct PostgresHotelReader {
    pool: PgPool,
}

impl PostgresHotelReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    updated_at: NaiveDateTime,
}

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    #[sqlx(rename = "hotelId")]
    hotel_id: i32,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    updated_at: NaiveDateTime,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: HotelId::from_db(row.id),
            name: row.name,
            image: row.image,
            created_at: from_db_timestamp(row.created_at),
            updated_at: from_db_timestamp(row.updated_at),
        }
    }
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: RoomId::from_db(row.id),
            name: row.name,
            capacity: row.capacity,
            hotel_id: HotelId::from_db(row.hotel_id),
            created_at: from_db_timestamp(row.created_at),
            updated_at: from_db_timestamp(row.updated_at),
        }
    }
}

#[async_trait]
impl HotelReader for PostgresHotelReader {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, image, "createdAt", "updatedAt"
            FROM "Hotel"
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list hotels", e))?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let hotel: Option<HotelRow> = sqlx::query_as(
            r#"
            SELECT id, name, image, "createdAt", "updatedAt"
            FROM "Hotel"
            WHERE id = $1
            "#,
        )
        .bind(hotel_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch hotel", e))?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms: Vec<RoomRow> = sqlx::query_as(
            r#"
            SELECT id, name, capacity, "hotelId", "createdAt", "updatedAt"
            FROM "Room"
            WHERE "hotelId" = $1
            ORDER BY id
            "#,
        )
        .bind(hotel_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch rooms", e))?;

        Ok(Some(HotelWithRooms::new(
            hotel.into(),
            rooms.into_iter().map(Room::from).collect(),
        )))
    }
}
