//! Application builder — wires state + router into an Axum app and runs it.

use std::sync::Arc;

use axum::Router;

use credgate_auth::gate::CredentialGate;
use credgate_auth::jwt::{JwtDecoder, JwtEncoder};
use credgate_auth::password::PasswordHasher;
use credgate_auth::user::MemoryUserStore;
use credgate_core::config::AppConfig;
use credgate_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration.
///
/// Wires the in-memory user store, password hasher, and JWT codecs into
/// the credential gate.
pub fn build_state(config: AppConfig) -> AppState {
    let store = Arc::new(MemoryUserStore::new());
    let hasher = Arc::new(PasswordHasher::new());
    let encoder = Arc::new(JwtEncoder::new(&config.auth));
    let decoder = Arc::new(JwtDecoder::new(&config.auth));

    let gate = Arc::new(CredentialGate::new(store, hasher, encoder, decoder));

    AppState {
        config: Arc::new(config),
        gate,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the CredGate server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CredGate server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
