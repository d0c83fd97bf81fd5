use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::mailer::MailTransport;
use crate::store::PgStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Postgres-backed implementation of the dispatcher's narrow interfaces
    /// (user directory, recognition store, delivery log).
    pub store: PgStore,
    /// Pluggable mail transport. Default: ResendMailer. Tests substitute a fake.
    pub mailer: Arc<dyn MailTransport>,
    pub config: Config,
}
