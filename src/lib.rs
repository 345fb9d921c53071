//! Event Hotels - Ticket-gated hotel listings for an event platform.
//!
//! Authenticated attendees whose ticket is paid, in person, and includes
//! lodging can list partner hotels and view a hotel's rooms.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
