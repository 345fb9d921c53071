//! Application handlers.
//!
//! Query handlers that orchestrate port lookups and domain rules.

pub mod lodging;
pub mod ticket;
