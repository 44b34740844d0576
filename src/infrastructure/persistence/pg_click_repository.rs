//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for click events.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, event: &ClickEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO mapping_clicks (code, ip, user_agent, referer)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&event.code)
        .bind(event.ip.as_deref())
        .bind(event.user_agent.as_deref())
        .bind(event.referer.as_deref())
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
