//! HTTP handlers for hotel endpoints.
//!
//! These handlers connect Axum routes to the lodging query handlers. Both
//! run behind the auth and ticket gate layers.

use std::sync::Arc;

use axum::extract::{Extension, Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::lodging::{
    GetHotelHandler, GetHotelQuery, ListHotelsHandler, ListHotelsQuery,
};
use crate::application::handlers::ticket::{CheckEligibilityHandler, CheckEligibilityResult};
use crate::domain::foundation::HotelId;
use crate::domain::lodging::LodgingError;
use crate::ports::{EnrollmentReader, HotelReader, SessionValidator, TicketReader};

use super::dto::{HotelResponse, HotelWithRoomsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is an `Arc`.
#[derive(Clone)]
pub struct HotelAppState {
    pub session_validator: Arc<dyn SessionValidator>,
    pub enrollment_reader: Arc<dyn EnrollmentReader>,
    pub ticket_reader: Arc<dyn TicketReader>,
    pub hotel_reader: Arc<dyn HotelReader>,
}

impl HotelAppState {
    pub fn check_eligibility_handler(&self) -> CheckEligibilityHandler {
        CheckEligibilityHandler::new(self.enrollment_reader.clone(), self.ticket_reader.clone())
    }

    pub fn list_hotels_handler(&self) -> ListHotelsHandler {
        ListHotelsHandler::new(self.hotel_reader.clone())
    }

    pub fn get_hotel_handler(&self) -> GetHotelHandler {
        GetHotelHandler::new(self.hotel_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /hotels - List every hotel
pub async fn list_hotels(
    State(state): State<HotelAppState>,
    RequireAuth(user): RequireAuth,
    Extension(eligible): Extension<CheckEligibilityResult>,
) -> Result<impl IntoResponse, ApiError> {
    let hotels = state.list_hotels_handler().handle(ListHotelsQuery).await?;

    tracing::debug!(
        user_id = %user.id,
        ticket_id = %eligible.ticket.id,
        count = hotels.len(),
        "Listed hotels"
    );

    let response: Vec<HotelResponse> = hotels.into_iter().map(HotelResponse::from).collect();
    Ok(Json(response))
}

/// GET /hotels/:hotelId - Get one hotel with its rooms
///
/// A segment that is not a positive `i32` cannot name a hotel and is
/// reported as not found.
pub async fn get_hotel(
    State(state): State<HotelAppState>,
    RequireAuth(user): RequireAuth,
    Extension(eligible): Extension<CheckEligibilityResult>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let hotel_id = raw_id
        .parse::<HotelId>()
        .map_err(|_| LodgingError::UnknownHotelRef(raw_id.clone()))?;

    let found = state
        .get_hotel_handler()
        .handle(GetHotelQuery { hotel_id })
        .await?;

    tracing::debug!(
        user_id = %user.id,
        ticket_id = %eligible.ticket.id,
        hotel_id = %hotel_id,
        rooms = found.rooms.len(),
        "Fetched hotel"
    );

    Ok(Json(HotelWithRoomsResponse::from(found)))
}
