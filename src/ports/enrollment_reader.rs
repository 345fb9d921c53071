//! Enrollment reader port.
//!
//! First link of the eligibility chain: user → enrollment.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::ticket::Enrollment;

/// Reader port for enrollment lookups.
///
/// # Contract
///
/// - `Ok(None)` when the user never enrolled
/// - `Err(DomainError)` only for storage faults
#[async_trait]
pub trait EnrollmentReader: Send + Sync {
    /// Find the enrollment owned by a user.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError>;
}
