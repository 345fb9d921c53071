//! PostgreSQL implementation of SessionReader.
//!
//! The `Session` table is written by the sign-in subsystem; this adapter
//! only checks for a row.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::ports::SessionReader;

/// PostgreSQL implementation of SessionReader.
#[derive(Clone)]
pub struct PostgresSessionReader {
    pool: PgPool,
}

impl PostgresSessionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionReader for PostgresSessionReader {
    async fn is_active(&self, token: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM "Session" WHERE token = $1)"#)
            .bind(token)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch session", e))
    }
}
