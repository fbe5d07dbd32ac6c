use std::sync::Arc;

use interview_prep_core::signup::SignupRules;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: interview_prep_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Signup field rules, built once from configuration.
    pub signup_rules: Arc<SignupRules>,
}

impl AppState {
    pub fn new(pool: interview_prep_db::DbPool, config: ServerConfig) -> Self {
        let signup_rules = SignupRules::new(config.min_password_length);
        Self {
            pool,
            config: Arc::new(config),
            signup_rules: Arc::new(signup_rules),
        }
    }
}
