//! Ticket gate middleware.
//!
//! Runs after `auth_middleware` on every hotel route. It resolves the
//! caller's enrollment and ticket and only lets the request through when the
//! ticket is paid, in person, and includes lodging.
//!
//! ```text
//! auth_middleware → ticket_gate_middleware → handler
//!                     ↓ inserts CheckEligibilityResult into extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::auth::AuthRejection;
use crate::adapters::http::error::ApiError;
use crate::application::handlers::ticket::{CheckEligibilityHandler, CheckEligibilityQuery};
use crate::domain::foundation::AuthenticatedUser;

/// Gate middleware state.
pub type TicketGateState = Arc<CheckEligibilityHandler>;

pub async fn ticket_gate_middleware(
    State(gate): State<TicketGateState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(user) = request.extensions().get::<AuthenticatedUser>().cloned() else {
        return AuthRejection::Unauthenticated.into_response();
    };

    let query = CheckEligibilityQuery { user_id: user.id };
    match gate.handle(query).await {
        Ok(eligible) => {
            request.extensions_mut().insert(eligible);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(user_id = %user.id, error = %e, "Ticket gate rejected request");
            ApiError::from(e).into_response()
        }
    }
}
