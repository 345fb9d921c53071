//! Ticket module - Enrollment, tickets, and hotel eligibility rules.
//!
//! All records here are owned by the registration and payment subsystems;
//! this crate only reads them to decide whether a user may see lodging.

mod aggregate;
mod enrollment;
mod errors;
mod status;

pub use aggregate::{Ticket, TicketType};
pub use enrollment::Enrollment;
pub use errors::{EligibilityError, PaymentRequiredReason};
pub use status::TicketStatus;
