//! PostgreSQL implementation of EnrollmentReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, EnrollmentId, UserId};
use crate::domain::ticket::Enrollment;
use crate::ports::EnrollmentReader;

/// PostgreSQL implementation of the EnrollmentReader port.
#[derive(Clone)]
pub struct PostgresEnrollmentReader {
    pool: PgPool,
}

impl PostgresEnrollmentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    #[sqlx(rename = "userId")]
    user_id: i32,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment::new(EnrollmentId::from_db(row.id), UserId::from_db(row.user_id))
    }
}

#[async_trait]
impl EnrollmentReader for PostgresEnrollmentReader {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Enrollment>, DomainError> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT id, "userId"
            FROM "Enrollment"
            WHERE "userId" = $1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch enrollment", e))?;

        Ok(row.map(Enrollment::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_to_enrollment() {
        let row = EnrollmentRow {
            id: 3,
            user_id: 12,
        };

        let enrollment = Enrollment::from(row);
        assert_eq!(enrollment.id, EnrollmentId::from_db(3));
        assert_eq!(enrollment.user_id, UserId::from_db(12));
    }
}
