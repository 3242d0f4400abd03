//! `AuthUser` extractor — pulls the token from the Authorization header,
//! verifies it, and injects the claims.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use credgate_auth::jwt::Claims;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the verified claims.
    pub fn claims(&self) -> &Claims {
        &self.0
    }

    /// Returns the authenticated username.
    pub fn username(&self) -> &str {
        self.0.username()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(strip_bearer);

        let claims = state.gate.verify(token)?;

        Ok(AuthUser(claims))
    }
}

/// The clients this service replaces send the raw token in the
/// Authorization header; standard clients send `Bearer <token>`.
/// Both are accepted.
fn strip_bearer(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header)
}
