//! Response DTOs.
//!
//! Bodies are intentionally flat (no envelope) to stay wire-compatible
//! with the clients this service replaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The signed session token.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Protected resource response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedResponse {
    /// Static resource payload.
    pub message: String,
    /// The authenticated username.
    pub user: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
