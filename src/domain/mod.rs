//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth)
//! - `ticket` - Enrollment, tickets, ticket types and the hotel eligibility rules
//! - `lodging` - Hotels and rooms

pub mod foundation;
pub mod lodging;
pub mod ticket;
