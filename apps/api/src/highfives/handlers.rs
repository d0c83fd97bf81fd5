//! Axum route handlers for the high-five API: creating recognitions,
//! listing them per user, and the weekly stats views.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cohort::{self, WeeklyStat};
use crate::errors::AppError;
use crate::models::high_five::{HighFiveRow, HighFiveWithPeer};
use crate::models::user::UserRow;
use crate::state::AppState;
use crate::store::{RecognitionStore, UserDirectory};

#[derive(Debug, Deserialize)]
pub struct CreateHighFiveRequest {
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MyWeeklyStatsResponse {
    pub given: i64,
    pub received: i64,
    pub needs_to_give: bool,
}

/// POST /api/v1/high-fives
///
/// Creates an immutable recognition record. Self-recognition is rejected.
pub async fn handle_create_high_five(
    State(state): State<AppState>,
    Json(request): Json<CreateHighFiveRequest>,
) -> Result<Json<HighFiveRow>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    if request.from_user_id == request.to_user_id {
        return Err(AppError::Validation(
            "cannot give a high-five to yourself".to_string(),
        ));
    }

    // Both endpoints must exist before the insert; surfaces a clean 404
    // instead of a foreign-key violation.
    state.store.get_user(request.from_user_id).await?;
    state.store.get_user(request.to_user_id).await?;

    let row = sqlx::query_as::<_, HighFiveRow>(
        r#"
        INSERT INTO high_fives (id, from_user_id, to_user_id, message)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.from_user_id)
    .bind(request.to_user_id)
    .bind(&request.message)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/v1/high-fives/received/:user_id
///
/// High-fives received by a user, newest first, joined with the sender.
pub async fn handle_list_received(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<HighFiveWithPeer>>, AppError> {
    let rows = sqlx::query_as::<_, HighFiveWithPeer>(
        r#"
        SELECT hf.id, hf.from_user_id, hf.to_user_id, hf.message, hf.created_at,
               u.name AS peer_name, u.email AS peer_email
        FROM high_fives hf
        JOIN users u ON u.id = hf.from_user_id
        WHERE hf.to_user_id = $1
        ORDER BY hf.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// GET /api/v1/high-fives/given/:user_id
///
/// High-fives given by a user, newest first, joined with the recipient.
pub async fn handle_list_given(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<HighFiveWithPeer>>, AppError> {
    let rows = sqlx::query_as::<_, HighFiveWithPeer>(
        r#"
        SELECT hf.id, hf.from_user_id, hf.to_user_id, hf.message, hf.created_at,
               u.name AS peer_name, u.email AS peer_email
        FROM high_fives hf
        JOIN users u ON u.id = hf.to_user_id
        WHERE hf.from_user_id = $1
        ORDER BY hf.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// GET /api/v1/users
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserRow>>, AppError> {
    Ok(Json(state.store.list_users().await?))
}

/// GET /api/v1/stats/weekly
///
/// The full weekly cohort, sorted by received count descending. Recomputed
/// from the store on every request; nothing is cached.
pub async fn handle_weekly_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeeklyStat>>, AppError> {
    let boundary = cohort::week_start(Utc::now());
    let users = state.store.list_users().await?;
    let edges = state.store.list_edges_since(boundary).await?;

    Ok(Json(cohort::weekly_stats(&users, &edges, boundary)))
}

/// GET /api/v1/stats/weekly/:user_id
///
/// One user's given/received counts for the current window, plus the
/// "still needs to give" flag the dashboard shows.
pub async fn handle_my_weekly_stats(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MyWeeklyStatsResponse>, AppError> {
    state.store.get_user(user_id).await?;
    let boundary = cohort::week_start(Utc::now());

    let given: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM high_fives WHERE from_user_id = $1 AND created_at >= $2",
    )
    .bind(user_id)
    .bind(boundary)
    .fetch_one(&state.db)
    .await?;

    let received: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM high_fives WHERE to_user_id = $1 AND created_at >= $2",
    )
    .bind(user_id)
    .bind(boundary)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(MyWeeklyStatsResponse {
        given,
        received,
        needs_to_give: given == 0,
    }))
}
