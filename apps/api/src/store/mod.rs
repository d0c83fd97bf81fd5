//! Narrow data-access interfaces the notification dispatcher works against.
//!
//! The dispatcher never touches `PgPool` directly — it sees the user
//! directory, the recognition store, and the delivery log as trait objects,
//! so tests can run the full dispatch loop against in-memory fakes.

pub mod postgres;

pub use postgres::PgStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::email_log::EmailKind;
use crate::models::high_five::{HighFiveEdge, HighFiveRow};
use crate::models::user::UserRow;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRow>, AppError>;
    async fn get_user(&self, id: Uuid) -> Result<UserRow, AppError>;
}

#[async_trait]
pub trait RecognitionStore: Send + Sync {
    async fn get_high_five(&self, id: Uuid) -> Result<HighFiveRow, AppError>;
    /// Sender/recipient endpoints of every high-five with `created_at >= since`.
    async fn list_edges_since(&self, since: DateTime<Utc>) -> Result<Vec<HighFiveEdge>, AppError>;
}

/// Append-only audit trail of dispatch outcomes. Best-effort: a failed
/// append never undoes a sent email.
#[async_trait]
pub trait DeliveryLog: Send + Sync {
    async fn append(&self, user_id: Uuid, kind: EmailKind) -> Result<(), AppError>;
}
