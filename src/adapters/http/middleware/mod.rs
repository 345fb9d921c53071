//! HTTP middleware for axum.
//!
//! - `auth` - Bearer token validation and the `RequireAuth` extractor
//! - `ticket_gate` - Ticket eligibility check for hotel routes

pub mod auth;
pub mod ticket_gate;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAuth};
pub use ticket_gate::{ticket_gate_middleware, TicketGateState};
