//! PostgreSQL implementation of TicketReader.
//!
//! `status` is a Postgres enum; it is cast to text and parsed so an
//! unknown variant surfaces as a database error instead of a decode panic.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, TicketId, TicketTypeId};
use crate::domain::ticket::{Ticket, TicketStatus, TicketType};
use crate::ports::TicketReader;

use super::from_db_timestamp;

/// PostgreSQL implementation of the TicketReader port.
#[derive(Clone)]
pub struct PostgresTicketReader {
    pool: PgPool,
}

impl PostgresTicketReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for ticket queries.
#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    #[sqlx(rename = "ticketTypeId")]
    ticket_type_id: i32,
    #[sqlx(rename = "enrollmentId")]
    enrollment_id: i32,
    status: String,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    updated_at: NaiveDateTime,
}

/// Row for ticket type queries.
#[derive(Debug, sqlx::FromRow)]
struct TicketTypeRow {
    id: i32,
    name: String,
    price: i32,
    #[sqlx(rename = "isRemote")]
    is_remote: bool,
    #[sqlx(rename = "includesHotel")]
    includes_hotel: bool,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    updated_at: NaiveDateTime,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DomainError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let status: TicketStatus = row.status.parse().map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid ticket status value: {}", row.status),
            )
        })?;

        Ok(Ticket {
            id: TicketId::from_db(row.id),
            ticket_type_id: TicketTypeId::from_db(row.ticket_type_id),
            enrollment_id: EnrollmentId::from_db(row.enrollment_id),
            status,
            created_at: from_db_timestamp(row.created_at),
            updated_at: from_db_timestamp(row.updated_at),
        })
    }
}

impl From<TicketTypeRow> for TicketType {
    fn from(row: TicketTypeRow) -> Self {
        TicketType {
            id: TicketTypeId::from_db(row.id),
            name: row.name,
            price: row.price,
            is_remote: row.is_remote,
            includes_hotel: row.includes_hotel,
            created_at: from_db_timestamp(row.created_at),
            updated_at: from_db_timestamp(row.updated_at),
        }
    }
}

#[async_trait]
impl TicketReader for PostgresTicketReader {
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
            SELECT id, "ticketTypeId", "enrollmentId", status::text AS status,
                   "createdAt", "updatedAt"
            FROM "Ticket"
            WHERE "enrollmentId" = $1
            "#,
        )
        .bind(enrollment_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch ticket", e))?;

        row.map(Ticket::try_from).transpose()
    }

    async fn find_ticket_type(
        &self,
        ticket_type_id: &TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError> {
        let row: Option<TicketTypeRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, "isRemote", "includesHotel", "createdAt", "updatedAt"
            FROM "TicketType"
            WHERE id = $1
            "#,
        )
        .bind(ticket_type_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch ticket type", e))?;

        Ok(row.map(TicketType::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn ticket_row(status: &str) -> TicketRow {
        let now = chrono::Utc::now().naive_utc();
        TicketRow {
            id: 1,
            ticket_type_id: 2,
            enrollment_id: 3,
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn paid_row_converts() {
        let ticket = Ticket::try_from(ticket_row("PAID")).unwrap();
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert_eq!(ticket.enrollment_id, EnrollmentId::from_db(3));
    }

    #[test]
    fn reserved_row_converts() {
        let ticket = Ticket::try_from(ticket_row("RESERVED")).unwrap();
        assert_eq!(ticket.status, TicketStatus::Reserved);
    }

    #[test]
    fn unknown_status_is_database_error() {
        let err = Ticket::try_from(ticket_row("REFUNDED")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("REFUNDED"));
    }

    #[test]
    fn timestamps_are_read_as_utc() {
        let row = ticket_row("PAID");
        let expected = Timestamp::from_datetime(row.created_at.and_utc());

        let ticket = Ticket::try_from(row).unwrap();
        assert_eq!(ticket.created_at, expected);
    }
}
