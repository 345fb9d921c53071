//! Ticket eligibility error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | EnrollmentNotFound | 404 |
//! | TicketNotFound | 404 |
//! | PaymentRequired | 402 |
//! | Infrastructure | 500 |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, UserId};

/// Why a ticket that exists does not grant hotel access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentRequiredReason {
    /// Ticket is still `RESERVED`.
    TicketNotPaid,

    /// Ticket type does not include lodging.
    HotelNotIncluded,

    /// Ticket type is for remote attendance.
    RemoteTicket,
}

impl PaymentRequiredReason {
    /// Get a user-facing message for the rejection reason.
    pub fn user_message(&self) -> &'static str {
        match self {
            PaymentRequiredReason::TicketNotPaid => {
                "Your ticket has not been paid yet. Complete the payment to see hotels."
            }
            PaymentRequiredReason::HotelNotIncluded => {
                "Your ticket type does not include hotel accommodation."
            }
            PaymentRequiredReason::RemoteTicket => {
                "Remote tickets do not include hotel accommodation."
            }
        }
    }
}

impl std::fmt::Display for PaymentRequiredReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}

/// Outcomes of the ticket eligibility gate other than success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EligibilityError {
    /// The user never enrolled in the event.
    #[error("No enrollment found for user {0}")]
    EnrollmentNotFound(UserId),

    /// The enrollment has no ticket attached.
    #[error("No ticket found for enrollment {0}")]
    TicketNotFound(EnrollmentId),

    /// A ticket exists but does not grant hotel access.
    #[error("{0}")]
    PaymentRequired(PaymentRequiredReason),

    /// Storage fault while evaluating the gate.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl EligibilityError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        EligibilityError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EligibilityError::EnrollmentNotFound(_) => ErrorCode::EnrollmentNotFound,
            EligibilityError::TicketNotFound(_) => ErrorCode::TicketNotFound,
            EligibilityError::PaymentRequired(_) => ErrorCode::PaymentRequired,
            EligibilityError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<PaymentRequiredReason> for EligibilityError {
    fn from(reason: PaymentRequiredReason) -> Self {
        EligibilityError::PaymentRequired(reason)
    }
}

impl From<DomainError> for EligibilityError {
    fn from(err: DomainError) -> Self {
        EligibilityError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_serializes_with_type_tag() {
        let json = serde_json::to_string(&PaymentRequiredReason::RemoteTicket).unwrap();
        assert_eq!(json, r#"{"type":"remote_ticket"}"#);
    }

    #[test]
    fn reason_messages_are_distinct() {
        assert!(PaymentRequiredReason::TicketNotPaid.user_message().contains("not been paid"));
        assert!(PaymentRequiredReason::HotelNotIncluded.user_message().contains("does not include"));
        assert!(PaymentRequiredReason::RemoteTicket.user_message().contains("Remote"));
    }

    #[test]
    fn codes_follow_variant() {
        let user = UserId::from_db(1);
        assert_eq!(
            EligibilityError::EnrollmentNotFound(user).code(),
            ErrorCode::EnrollmentNotFound
        );
        assert_eq!(
            EligibilityError::from(PaymentRequiredReason::TicketNotPaid).code(),
            ErrorCode::PaymentRequired
        );
        assert_eq!(
            EligibilityError::infrastructure("down").code(),
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn domain_error_becomes_infrastructure_not_absence() {
        let err: EligibilityError = DomainError::database("find ticket", "timeout").into();
        assert!(matches!(err, EligibilityError::Infrastructure(_)));
    }
}
