//! In-memory adapters.
//!
//! Implementations of the storage ports that keep everything in process:
//!
//! - `InMemoryRegistrationStore` - enrollments, tickets, ticket types, sessions
//! - `InMemoryHotelStore` - hotels and rooms

mod hotels;
mod registration;

pub use hotels::InMemoryHotelStore;
pub use registration::InMemoryRegistrationStore;
