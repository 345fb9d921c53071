//! CheckEligibilityHandler - Query handler for the hotel ticket gate.
//!
//! Decision table, first match wins:
//!
//! | Condition | Outcome |
//! |---|---|
//! | no enrollment for user | `EnrollmentNotFound` |
//! | no ticket for enrollment | `TicketNotFound` |
//! | ticket is `RESERVED` | `PaymentRequired(TicketNotPaid)` |
//! | type has no hotel | `PaymentRequired(HotelNotIncluded)` |
//! | type is remote | `PaymentRequired(RemoteTicket)` |
//! | otherwise | eligible |

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::ticket::{EligibilityError, Ticket, TicketType};
use crate::ports::{EnrollmentReader, TicketReader};

/// Query to check whether a user may see hotel listings.
#[derive(Debug, Clone)]
pub struct CheckEligibilityQuery {
    pub user_id: UserId,
}

/// An eligible ticket together with the type that made it eligible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEligibilityResult {
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}

/// Handler for the ticket eligibility gate.
///
/// Pure read path: three lookups chained with `?`, no writes and no retries.
/// Absence of a record and storage faults stay distinct all the way out.
pub struct CheckEligibilityHandler {
    enrollments: Arc<dyn EnrollmentReader>,
    tickets: Arc<dyn TicketReader>,
}

impl CheckEligibilityHandler {
    pub fn new(enrollments: Arc<dyn EnrollmentReader>, tickets: Arc<dyn TicketReader>) -> Self {
        Self {
            enrollments,
            tickets,
        }
    }

    pub async fn handle(
        &self,
        query: CheckEligibilityQuery,
    ) -> Result<CheckEligibilityResult, EligibilityError> {
        let user_id = query.user_id;

        let enrollment = self
            .enrollments
            .find_by_user(&user_id)
            .await?
            .ok_or(EligibilityError::EnrollmentNotFound(user_id))?;

        let ticket = self
            .tickets
            .find_by_enrollment(&enrollment.id)
            .await?
            .ok_or(EligibilityError::TicketNotFound(enrollment.id))?;

        // Unpaid tickets are rejected before their type is loaded.
        ticket.ensure_paid()?;

        let ticket_type = self
            .tickets
            .find_ticket_type(&ticket.ticket_type_id)
            .await?
            .ok_or_else(|| {
                EligibilityError::infrastructure(format!(
                    "Ticket {} references missing ticket type {}",
                    ticket.id, ticket.ticket_type_id
                ))
            })?;

        ticket_type.ensure_hotel_access()?;

        tracing::debug!(
            user_id = %user_id,
            ticket_id = %ticket.id,
            "Ticket grants hotel access"
        );

        Ok(CheckEligibilityResult {
            ticket,
            ticket_type,
        })
    }
}
