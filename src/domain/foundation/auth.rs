//! Authentication types for the domain layer.
//!
//! These types represent the caller identity extracted from a session token.
//! They carry no provider dependencies: any `SessionValidator` adapter can
//! populate them.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token validation:
//! let user = AuthenticatedUser::new(UserId::new(42)?);
//!
//! // Inject into request extensions for the gate and handlers
//! request.extensions_mut().insert(user);
//! ```

use super::UserId;
use thiserror::Error;

/// Caller identity extracted from a validated session token.
///
/// Only the identifier is consumed downstream; the ticket gate keys every
/// lookup on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the token claims.
    pub id: UserId,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The token verifies but no longer matches an active session (logged out).
    #[error("Session is no longer active")]
    SessionRevoked,

    /// The session store or key material is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
