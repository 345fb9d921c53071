//! PostgreSQL adapters - Database implementations for the read ports.
//!
//! This module provides adapters for PostgreSQL-backed lookups:
//! - `PostgresEnrollmentReader` - Enrollment by user
//! - `PostgresTicketReader` - Ticket by enrollment, ticket types
//! - `PostgresHotelReader` - Hotels and their rooms
//! - `PostgresSessionReader` - Issued session tokens
//!
//! Timestamp columns are `TIMESTAMP(3)` without time zone and hold UTC.

mod enrollment_reader;
mod hotel_reader;
mod session_reader;
mod ticket_reader;

pub use enrollment_reader::PostgresEnrollmentReader;
pub use hotel_reader::PostgresHotelReader;
pub use session_reader::PostgresSessionReader;
pub use ticket_reader::PostgresTicketReader;

use chrono::NaiveDateTime;

use crate::domain::foundation::Timestamp;

fn from_db_timestamp(naive: NaiveDateTime) -> Timestamp {
    Timestamp::from_datetime(naive.and_utc())
}
