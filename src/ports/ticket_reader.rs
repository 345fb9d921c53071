//! Ticket reader port.
//!
//! Second and third links of the eligibility chain: enrollment → ticket,
//! ticket → ticket type. Kept as two calls so an unpaid ticket can be
//! rejected without loading its type.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EnrollmentId, TicketTypeId};
use crate::domain::ticket::{Ticket, TicketType};

/// Reader port for tickets and ticket types.
///
/// # Contract
///
/// - `Ok(None)` when the row is absent
/// - `Err(DomainError)` only for storage faults
#[async_trait]
pub trait TicketReader: Send + Sync {
    /// Find the ticket attached to an enrollment.
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;

    /// Find a ticket type by id.
    async fn find_ticket_type(
        &self,
        ticket_type_id: &TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn TicketReader) {}
    }
}
