//! Enrollment read model.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EnrollmentId, UserId};

/// A user's registration for the event. Prerequisite to owning a ticket.
///
/// Only the link between user and enrollment matters to the gate; personal
/// data on the record belongs to the registration subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
}

impl Enrollment {
    pub fn new(id: EnrollmentId, user_id: UserId) -> Self {
        Self { id, user_id }
    }
}
