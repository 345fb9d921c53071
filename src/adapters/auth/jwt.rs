//! JWT adapter for bearer token validation.
//!
//! Implements the `SessionValidator` port for the platform's own access
//! tokens: HS256-signed JWTs carrying a numeric `userId` claim. Validation:
//!
//! 1. Verify the signature against the shared secret
//! 2. Verify expiry when the token carries an `exp` claim
//! 3. Optionally confirm the token still has a row in the sessions table
//! 4. Map the `userId` claim to the domain `AuthenticatedUser`
//!
//! Tokens issued by the sign-in subsystem carry no `exp`; sign-out deletes
//! the session row instead, which is why step 3 is on by default.

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionReader, SessionValidator};

/// JWT claims issued by the sign-in subsystem.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionClaims {
    /// The numeric user id
    user_id: i32,

    /// Expiry timestamp (Unix epoch seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,

    /// Issued at timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
}

/// HS256 session validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    sessions: Option<Arc<dyn SessionReader>>,
}

impl JwtSessionValidator {
    /// Create a validator for tokens signed with `secret`.
    ///
    /// `leeway_secs` is the clock skew tolerated on `exp`.
    pub fn new(secret: &SecretString, leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_secs;
        validation.validate_exp = true;
        // `exp` is checked when present but not required.
        validation.set_required_spec_claims::<&str>(&[]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            sessions: None,
        }
    }

    /// Require every token to have an active row in the sessions table.
    pub fn with_session_reader(mut self, sessions: Arc<dyn SessionReader>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    fn decode_claims(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }

    async fn ensure_session_active(&self, token: &str) -> Result<(), AuthError> {
        let Some(sessions) = &self.sessions else {
            return Ok(());
        };

        match sessions.is_active(token).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::debug!("Token has no active session");
                Err(AuthError::SessionRevoked)
            }
            Err(e) => {
                tracing::error!("Session lookup failed: {}", e);
                Err(AuthError::service_unavailable("Session store unavailable"))
            }
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let user_id = UserId::new(claims.user_id).map_err(|_| {
            tracing::warn!("Invalid user id in token: {}", claims.user_id);
            AuthError::InvalidToken
        })?;

        self.ensure_session_active(token).await?;

        Ok(AuthenticatedUser::new(user_id))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("leeway", &self.validation.leeway)
            .field("require_session", &self.sessions.is_some())
            .finish_non_exhaustive()
    }
}
