//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Authentication Ports
//!
//! - `SessionValidator` - Bearer token to caller identity
//! - `SessionReader` - Issued-session lookup used to detect sign-out
//!
//! ## Storage Ports
//!
//! - `EnrollmentReader` - User to enrollment
//! - `TicketReader` - Enrollment to ticket, ticket to ticket type
//! - `HotelReader` - Hotel inventory and rooms

mod enrollment_reader;
mod hotel_reader;
mod session_reader;
mod session_validator;
mod ticket_reader;

pub use enrollment_reader::EnrollmentReader;
pub use hotel_reader::HotelReader;
pub use session_reader::SessionReader;
pub use session_validator::SessionValidator;
pub use ticket_reader::TicketReader;
