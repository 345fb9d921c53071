//! HTTP error mapping.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | AuthError (invalid, expired, revoked) | 401 |
//! | AuthError::ServiceUnavailable | 503 |
//! | EnrollmentNotFound / TicketNotFound | 404 |
//! | PaymentRequired | 402 |
//! | NoHotels / HotelNotFound | 404 |
//! | Infrastructure | 500 |
//!
//! The status code is the contract; the body is informational.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{AuthError, ErrorCode};
use crate::domain::lodging::LodgingError;
use crate::domain::ticket::EligibilityError;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Every failure a hotel request can end in.
#[derive(Debug)]
pub enum ApiError {
    Auth(AuthError),
    Eligibility(EligibilityError),
    Lodging(LodgingError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl From<EligibilityError> for ApiError {
    fn from(err: EligibilityError) -> Self {
        Self::Eligibility(err)
    }
}

impl From<LodgingError> for ApiError {
    fn from(err: LodgingError) -> Self {
        Self::Lodging(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Auth(AuthError::ServiceUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Eligibility(EligibilityError::PaymentRequired(_)) => {
                StatusCode::PAYMENT_REQUIRED
            }
            ApiError::Eligibility(EligibilityError::Infrastructure(_))
            | ApiError::Lodging(LodgingError::Infrastructure(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Eligibility(_) | ApiError::Lodging(_) => StatusCode::NOT_FOUND,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Auth(AuthError::ServiceUnavailable(msg)) => {
                tracing::error!("Auth service unavailable: {}", msg);
                ErrorResponse::new("AUTH_UNAVAILABLE", "Authentication service unavailable")
            }
            ApiError::Auth(err) => {
                ErrorResponse::new(ErrorCode::Unauthorized.to_string(), err.to_string())
            }
            ApiError::Eligibility(EligibilityError::PaymentRequired(reason)) => {
                ErrorResponse::with_details(
                    ErrorCode::PaymentRequired.to_string(),
                    reason.user_message(),
                    serde_json::json!({ "reason": reason }),
                )
            }
            ApiError::Eligibility(EligibilityError::Infrastructure(msg))
            | ApiError::Lodging(LodgingError::Infrastructure(msg)) => {
                tracing::error!("Request failed: {}", msg);
                ErrorResponse::new(ErrorCode::InternalError.to_string(), INTERNAL_MESSAGE)
            }
            ApiError::Eligibility(err) => ErrorResponse::new(err.code().to_string(), err.to_string()),
            ApiError::Lodging(err) => ErrorResponse::new(err.code().to_string(), err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EnrollmentId, HotelId, UserId};
    use crate::domain::ticket::PaymentRequiredReason;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Status Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn auth_failures_are_unauthorized() {
        for err in [
            AuthError::InvalidToken,
            AuthError::TokenExpired,
            AuthError::SessionRevoked,
        ] {
            assert_eq!(ApiError::from(err).status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn auth_outage_is_service_unavailable() {
        let err = ApiError::from(AuthError::service_unavailable("down"));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn absence_is_not_found() {
        let cases = [
            ApiError::from(EligibilityError::EnrollmentNotFound(UserId::from_db(1))),
            ApiError::from(EligibilityError::TicketNotFound(EnrollmentId::from_db(1))),
            ApiError::from(LodgingError::NoHotels),
            ApiError::from(LodgingError::HotelNotFound(HotelId::from_db(1))),
        ];
        for err in cases {
            assert_eq!(err.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn every_payment_reason_is_payment_required() {
        for reason in [
            PaymentRequiredReason::TicketNotPaid,
            PaymentRequiredReason::HotelNotIncluded,
            PaymentRequiredReason::RemoteTicket,
        ] {
            let err = ApiError::from(EligibilityError::PaymentRequired(reason));
            assert_eq!(err.status(), StatusCode::PAYMENT_REQUIRED);
        }
    }

    #[test]
    fn storage_faults_are_internal() {
        assert_eq!(
            ApiError::from(EligibilityError::infrastructure("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(LodgingError::infrastructure("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Body Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn payment_required_body_carries_reason() {
        let response = ApiError::from(EligibilityError::PaymentRequired(
            PaymentRequiredReason::RemoteTicket,
        ))
        .into_response();

        let body = body_json(response).await;
        assert_eq!(body["error_code"], "PAYMENT_REQUIRED");
        assert_eq!(body["details"]["reason"]["type"], "remote_ticket");
    }

    #[tokio::test]
    async fn internal_body_hides_message() {
        let response =
            ApiError::from(LodgingError::infrastructure("password authentication failed"))
                .into_response();

        let body = body_json(response).await;
        assert_eq!(body["error_code"], "INTERNAL_ERROR");
        assert_eq!(body["message"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn not_found_body_names_what_is_missing() {
        let response = ApiError::from(LodgingError::HotelNotFound(HotelId::from_db(7))).into_response();

        let body = body_json(response).await;
        assert_eq!(body["error_code"], "HOTEL_NOT_FOUND");
        assert_eq!(body["message"], "Hotel not found: 7");
    }

    #[test]
    fn error_response_with_details_includes_details() {
        let details = serde_json::json!({"field": "hotelId"});
        let response = ErrorResponse::with_details("VALIDATION_FAILED", "Invalid", details.clone());
        assert_eq!(response.details, Some(details));
    }
}
