use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One peer-to-peer recognition. Immutable once created; there is no update
/// or delete path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HighFiveRow {
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A high-five joined with the counterpart user (the sender for received
/// listings, the recipient for given listings).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HighFiveWithPeer {
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub peer_name: String,
    pub peer_email: String,
}

/// The sender/recipient endpoints of a high-five — all the cohort analyzer
/// needs from a recognition in the weekly window.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct HighFiveEdge {
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
}
