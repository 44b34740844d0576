//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ShortMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;

/// Database row shape for `short_mappings`.
#[derive(sqlx::FromRow)]
struct MappingRow {
    code: String,
    target_url: String,
    owner_id: Option<String>,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    active: bool,
}

impl From<MappingRow> for ShortMapping {
    fn from(row: MappingRow) -> Self {
        ShortMapping::new(
            row.code,
            row.target_url,
            row.owner_id,
            row.created_at,
            row.expires_at,
            row.active,
        )
    }
}

/// PostgreSQL repository for short mappings.
///
/// Insert-if-absent maps onto `INSERT .. ON CONFLICT DO NOTHING` against the
/// primary key on `code`. The database arbitrates races: of any number of
/// concurrent inserts for one code, exactly one reports an affected row.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert_if_absent(&self, mapping: &ShortMapping) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_mappings (code, target_url, owner_id, created_at, expires_at, active)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(&mapping.code)
        .bind(&mapping.target_url)
        .bind(mapping.owner_id.as_deref())
        .bind(mapping.created_at)
        .bind(mapping.expires_at)
        .bind(mapping.active)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 1 {
            Ok(InsertOutcome::Inserted)
        } else {
            Ok(InsertOutcome::Conflict)
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT code, target_url, owner_id, created_at, expires_at, active
            FROM short_mappings
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortMapping::from))
    }
}
