//! Axum router configuration for hotel endpoints.
//!
//! Every route sits behind two route layers. `route_layer` wraps in reverse
//! order of addition, so the auth layer (added last) runs first:
//!
//! ```text
//! auth_middleware → ticket_gate_middleware → list_hotels / get_hotel
//! ```
//!
//! The `:hotel_id` segment is parsed inside the handler, so an unusable id
//! is only reported (as not found) after the caller has been authenticated
//! and gated.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use super::handlers::{get_hotel, list_hotels, HotelAppState};
use crate::adapters::http::middleware::{
    auth_middleware, ticket_gate_middleware, AuthState, TicketGateState,
};

/// Create the hotel routes without layers.
///
/// # Routes
/// - `GET /` - List hotels
/// - `GET /:hotel_id` - Get a hotel with its rooms
pub fn hotel_routes() -> Router<HotelAppState> {
    Router::new()
        .route("/", get(list_hotels))
        .route("/:hotel_id", get(get_hotel))
}

/// Create the hotel router with authentication and the ticket gate applied,
/// suitable for nesting at `/hotels`.
pub fn hotel_router(state: HotelAppState) -> Router {
    let auth: AuthState = state.session_validator.clone();
    let gate: TicketGateState = Arc::new(state.check_eligibility_handler());

    hotel_routes()
        .route_layer(middleware::from_fn_with_state(gate, ticket_gate_middleware))
        .route_layer(middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(state)
}
