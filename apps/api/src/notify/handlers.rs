//! Axum route handlers for the two dispatch triggers.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::notify::dispatcher::Dispatcher;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HighFiveCreatedRequest {
    pub high_five_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct HighFiveCreatedResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ReminderBatchResponse {
    pub reminders_sent: usize,
    pub total_candidates: usize,
}

fn dispatcher(state: &AppState) -> Dispatcher<'_> {
    Dispatcher {
        users: &state.store,
        high_fives: &state.store,
        delivery_log: &state.store,
        mailer: state.mailer.as_ref(),
        app_url: &state.config.app_url,
    }
}

/// POST /api/v1/notifications/high-five
///
/// Called by the database change hook once per new high-five. Fails as a
/// whole if the high-five or either user cannot be looked up.
pub async fn handle_high_five_created(
    State(state): State<AppState>,
    Json(request): Json<HighFiveCreatedRequest>,
) -> Result<Json<HighFiveCreatedResponse>, AppError> {
    dispatcher(&state)
        .notify_high_five_created(request.high_five_id)
        .await?;

    Ok(Json(HighFiveCreatedResponse {
        status: "sent".to_string(),
    }))
}

/// POST /api/v1/reminders/run
///
/// Called by the scheduler (originally cron `0 14 * * 5`). Evaluates the
/// current instant fresh on every invocation.
pub async fn handle_run_reminder_batch(
    State(state): State<AppState>,
) -> Result<Json<ReminderBatchResponse>, AppError> {
    let report = dispatcher(&state).run_weekly_reminder_batch(Utc::now()).await?;

    Ok(Json(ReminderBatchResponse {
        reminders_sent: report.reminders_sent,
        total_candidates: report.total_candidates,
    }))
}
