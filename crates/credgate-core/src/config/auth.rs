//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Built-in development secret. Startup warns when it is still in use.
const DEV_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token TTL in minutes.
    #[serde(default = "default_jwt_ttl")]
    pub jwt_ttl_minutes: u64,
}

impl AuthConfig {
    /// Returns true while the built-in development secret is in use.
    pub fn is_default_secret(&self) -> bool {
        self.jwt_secret == DEV_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_ttl_minutes: default_jwt_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    DEV_SECRET.to_string()
}

fn default_jwt_ttl() -> u64 {
    60
}
