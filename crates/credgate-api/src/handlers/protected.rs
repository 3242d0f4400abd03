//! Protected resource handler.

use axum::Json;

use credgate_auth::gate::CredentialGate;

use crate::dto::response::ProtectedResponse;
use crate::extractors::AuthUser;

/// GET /protected
///
/// The `AuthUser` extractor has already verified the token; this handler
/// only shapes the payload.
pub async fn protected(auth: AuthUser) -> Json<ProtectedResponse> {
    let resource = CredentialGate::resource_for(auth.claims());

    Json(ProtectedResponse {
        message: resource.message,
        user: resource.user,
    })
}
