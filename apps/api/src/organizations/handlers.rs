//! Axum route handlers for the organizations feature.
//!
//! The whole feature sits behind `Config::organizations_enabled`, resolved
//! once at startup: when the flag is off the routes are simply not mounted.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::cohort;
use crate::errors::AppError;
use crate::models::organization::{OrganizationRow, OrganizationStatsRow};
use crate::state::AppState;

/// GET /api/v1/organizations
pub async fn handle_list_organizations(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganizationRow>>, AppError> {
    let rows =
        sqlx::query_as::<_, OrganizationRow>("SELECT * FROM organizations ORDER BY name")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(rows))
}

/// GET /api/v1/organizations/stats
///
/// Per-organization member and high-five totals, with this week's count
/// measured from the same Monday boundary the cohort uses.
pub async fn handle_organization_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganizationStatsRow>>, AppError> {
    let boundary = cohort::week_start(Utc::now());

    let rows = sqlx::query_as::<_, OrganizationStatsRow>(
        r#"
        SELECT o.id AS organization_id,
               o.name AS organization_name,
               COUNT(DISTINCT u.id) AS user_count,
               COUNT(DISTINCT hf.id) AS total_high_fives,
               COUNT(DISTINCT hf.id) FILTER (WHERE hf.created_at >= $1) AS high_fives_this_week
        FROM organizations o
        LEFT JOIN users u ON u.organization_id = o.id
        LEFT JOIN high_fives hf ON hf.from_user_id = u.id
        GROUP BY o.id, o.name
        ORDER BY o.name
        "#,
    )
    .bind(boundary)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}
