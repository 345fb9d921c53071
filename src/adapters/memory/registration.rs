//! In-memory registration store.
//!
//! Implements `EnrollmentReader`, `TicketReader` and `SessionReader` over
//! plain vectors. Used by tests and local demos where no database is
//! available.
//!
//! # Example
//!
//! ```ignore
//! let store = InMemoryRegistrationStore::new()
//!     .with_enrollment(Enrollment::new(EnrollmentId::from_db(1), UserId::from_db(7)))
//!     .with_ticket_type(hotel_type)
//!     .with_ticket(paid_ticket);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, TicketTypeId, UserId};
use crate::domain::ticket::{Enrollment, Ticket, TicketType};
use crate::ports::{EnrollmentReader, SessionReader, TicketReader};

#[derive(Debug, Default)]
struct Records {
    enrollments: Vec<Enrollment>,
    tickets: Vec<Ticket>,
    ticket_types: Vec<TicketType>,
    sessions: Vec<String>,
}

/// In-memory enrollment, ticket and session records.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationStore {
    records: RwLock<Records>,
    /// Error returned by every read while set
    force_error: RwLock<Option<String>>,
    ticket_type_lookups: AtomicUsize,
}

impl InMemoryRegistrationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enrollment(self, enrollment: Enrollment) -> Self {
        self.add_enrollment(enrollment);
        self
    }

    pub fn with_ticket(self, ticket: Ticket) -> Self {
        self.add_ticket(ticket);
        self
    }

    pub fn with_ticket_type(self, ticket_type: TicketType) -> Self {
        self.add_ticket_type(ticket_type);
        self
    }

    /// Registers an issued session token.
    pub fn with_session(self, token: impl Into<String>) -> Self {
        self.add_session(token);
        self
    }

    /// Forces every read to fail with a database error.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(message.into());
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn add_enrollment(&self, enrollment: Enrollment) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .enrollments
            .push(enrollment);
    }

    pub fn add_ticket(&self, ticket: Ticket) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .tickets
            .push(ticket);
    }

    pub fn add_ticket_type(&self, ticket_type: TicketType) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .ticket_types
            .push(ticket_type);
    }

    pub fn add_session(&self, token: impl Into<String>) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .sessions
            .push(token.into());
    }

    /// Deletes a session token, as sign-out does.
    pub fn revoke_session(&self, token: &str) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .sessions
            .retain(|t| t != token);
    }

    /// Number of `find_ticket_type` calls served so far.
    pub fn ticket_type_lookups(&self) -> usize {
        self.ticket_type_lookups.load(Ordering::SeqCst)
    }

    fn check_forced_error(&self) -> Result<(), DomainError> {
        match self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(message) => Err(DomainError::new(ErrorCode::DatabaseError, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EnrollmentReader for InMemoryRegistrationStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError> {
        self.check_forced_error()?;
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .enrollments
            .iter()
            .find(|e| &e.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl TicketReader for InMemoryRegistrationStore {
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.check_forced_error()?;
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tickets
            .iter()
            .find(|t| &t.enrollment_id == enrollment_id)
            .cloned())
    }

    async fn find_ticket_type(
        &self,
        ticket_type_id: &TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError> {
        self.ticket_type_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_forced_error()?;
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .ticket_types
            .iter()
            .find(|t| &t.id == ticket_type_id)
            .cloned())
    }
}

#[async_trait]
impl SessionReader for InMemoryRegistrationStore {
    async fn is_active(&self, token: &str) -> Result<bool, DomainError> {
        self.check_forced_error()?;
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sessions
            .iter()
            .any(|t| t == token))
    }
}
