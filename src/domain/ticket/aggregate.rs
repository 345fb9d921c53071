//! Ticket and TicketType read models with the eligibility rules.
//!
//! The rules are split in two so that callers can reject an unpaid ticket
//! before loading its type:
//!
//! 1. [`Ticket::ensure_paid`] - status must be `PAID`
//! 2. [`TicketType::ensure_hotel_access`] - type must include a hotel and
//!    must not be remote

use serde::{Deserialize, Serialize};

use super::errors::PaymentRequiredReason;
use super::TicketStatus;
use crate::domain::foundation::{EnrollmentId, TicketId, TicketTypeId, Timestamp};

/// A purchased entitlement tied to an enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub ticket_type_id: TicketTypeId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ticket {
    /// Checks that the ticket has been paid for.
    pub fn ensure_paid(&self) -> Result<(), PaymentRequiredReason> {
        if self.status.is_paid() {
            Ok(())
        } else {
            Err(PaymentRequiredReason::TicketNotPaid)
        }
    }
}

/// Category of ticket. Immutable once referenced by a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Price in the platform's smallest currency unit.
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TicketType {
    /// Checks that holders of this type may book lodging.
    ///
    /// `includes_hotel` is checked before `is_remote`, so a remote type
    /// without hotel reports `HotelNotIncluded`.
    pub fn ensure_hotel_access(&self) -> Result<(), PaymentRequiredReason> {
        if !self.includes_hotel {
            return Err(PaymentRequiredReason::HotelNotIncluded);
        }
        if self.is_remote {
            return Err(PaymentRequiredReason::RemoteTicket);
        }
        Ok(())
    }
}
