use anyhow::{Context, Result};

/// Default application URL used in email links when APP_URL is unset.
pub const DEFAULT_APP_URL: &str = "http://localhost:4200";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub resend_api_key: String,
    pub mail_from: String,
    pub app_url: String,
    /// Capability flag for the organizations feature, resolved once at
    /// startup instead of probing the schema per call.
    pub organizations_enabled: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            resend_api_key: require_env("RESEND_API_KEY")?,
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "gib5 <noreply@gib5.app>".to_string()),
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            organizations_enabled: std::env::var("ORGANIZATIONS_ENABLED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
