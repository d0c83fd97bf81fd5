use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::email_log::EmailKind;
use crate::models::high_five::{HighFiveEdge, HighFiveRow};
use crate::models::user::UserRow;
use crate::store::{DeliveryLog, RecognitionStore, UserDirectory};

/// Postgres-backed implementation of the dispatcher's data-access traits.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgStore {
    async fn list_users(&self) -> Result<Vec<UserRow>, AppError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users ORDER BY name")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn get_user(&self, id: Uuid) -> Result<UserRow, AppError> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
    }
}

#[async_trait]
impl RecognitionStore for PgStore {
    async fn get_high_five(&self, id: Uuid) -> Result<HighFiveRow, AppError> {
        sqlx::query_as::<_, HighFiveRow>("SELECT * FROM high_fives WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("High-five {id} not found")))
    }

    async fn list_edges_since(&self, since: DateTime<Utc>) -> Result<Vec<HighFiveEdge>, AppError> {
        Ok(sqlx::query_as::<_, HighFiveEdge>(
            "SELECT from_user_id, to_user_id FROM high_fives WHERE created_at >= $1",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[async_trait]
impl DeliveryLog for PgStore {
    async fn append(&self, user_id: Uuid, kind: EmailKind) -> Result<(), AppError> {
        sqlx::query("INSERT INTO email_logs (user_id, type) VALUES ($1, $2)")
            .bind(user_id)
            .bind(kind.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
