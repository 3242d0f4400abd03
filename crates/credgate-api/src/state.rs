//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use credgate_auth::gate::CredentialGate;
use credgate_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Credential and session gate
    pub gate: Arc<CredentialGate>,
}
