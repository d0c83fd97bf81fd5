pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::highfives::handlers as highfives;
use crate::notify::handlers as notify;
use crate::organizations::handlers as organizations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        // High-five API
        .route("/api/v1/high-fives", post(highfives::handle_create_high_five))
        .route(
            "/api/v1/high-fives/received/:user_id",
            get(highfives::handle_list_received),
        )
        .route(
            "/api/v1/high-fives/given/:user_id",
            get(highfives::handle_list_given),
        )
        .route("/api/v1/users", get(highfives::handle_list_users))
        // Weekly stats
        .route("/api/v1/stats/weekly", get(highfives::handle_weekly_stats))
        .route(
            "/api/v1/stats/weekly/:user_id",
            get(highfives::handle_my_weekly_stats),
        )
        // Dispatch triggers (database hook + scheduler)
        .route(
            "/api/v1/notifications/high-five",
            post(notify::handle_high_five_created),
        )
        .route("/api/v1/reminders/run", post(notify::handle_run_reminder_batch));

    // Organizations capability, resolved once at startup.
    if state.config.organizations_enabled {
        router = router
            .route(
                "/api/v1/organizations",
                get(organizations::handle_list_organizations),
            )
            .route(
                "/api/v1/organizations/stats",
                get(organizations::handle_organization_stats),
            );
    }

    router.with_state(state)
}
