use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrganizationRow {
    pub id: Uuid,
    pub name: String,
    pub domain: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregated per-organization activity, computed on demand.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrganizationStatsRow {
    pub organization_id: Uuid,
    pub organization_name: String,
    pub user_count: i64,
    pub total_high_fives: i64,
    pub high_fives_this_week: i64,
}
