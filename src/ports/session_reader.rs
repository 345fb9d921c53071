//! Session reader port.
//!
//! The platform records every issued token in a sessions table and deletes
//! the row on sign-out. A token with a valid signature but no row is a
//! revoked session. The table itself is owned by the sign-in subsystem.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Read-only view of the issued-session store.
#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Returns true if a session row exists for this exact token.
    async fn is_active(&self, token: &str) -> Result<bool, DomainError>;
}
