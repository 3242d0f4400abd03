//! Credential and session gate — register, login, and verify flows.

use std::sync::Arc;

use tracing::{debug, info, warn};

use credgate_core::error::AppError;
use credgate_core::result::AppResult;

use crate::jwt::encoder::IssuedToken;
use crate::jwt::{Claims, JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;
use crate::user::{User, UserStore};

/// Static payload returned to authenticated callers.
const PROTECTED_MESSAGE: &str = "This is a protected resource";

/// The protected payload, annotated with the authenticated username.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProtectedResource {
    /// Static resource payload.
    pub message: String,
    /// The authenticated username.
    pub user: String,
}

/// Orchestrates the credential and session lifecycle.
///
/// A token moves through `Issued -> Valid -> Expired/Invalid`; once it
/// stops verifying there is no way back, and the caller re-authenticates
/// via [`CredentialGate::login`] for a fresh one.
#[derive(Clone)]
pub struct CredentialGate {
    /// Credential record storage.
    store: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// JWT encoder for token issuance.
    encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    decoder: Arc<JwtDecoder>,
}

impl std::fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialGate")
            .field("encoder", &self.encoder)
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl CredentialGate {
    /// Creates a new gate with all required dependencies.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            store,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Registers a new credential record.
    ///
    /// Hashes the password with a fresh random salt and inserts the record.
    /// A duplicate username fails with a conflict. No password-strength
    /// policy is applied.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self.store.insert(User::new(username, password_hash)).await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Performs the login flow:
    ///
    /// 1. Look the record up by exact username
    /// 2. Verify the password against the stored hash
    /// 3. Issue a signed, time-bounded token
    ///
    /// An unknown username and a failed hash comparison are
    /// indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<IssuedToken> {
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        let password_valid = self
            .hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            warn!(username = %username, "Login failed: password mismatch");
            return Err(AppError::authentication("Invalid credentials"));
        }

        let issued = self.encoder.issue(&user.username)?;
        info!(
            username = %user.username,
            expires_at = %issued.expires_at,
            "Login successful"
        );
        Ok(issued)
    }

    /// Verifies a token's signature and expiry.
    ///
    /// The decoder distinguishes expiry from tampering internally; callers
    /// see a single coarse failure and must re-authenticate either way.
    pub fn verify(&self, token: Option<&str>) -> AppResult<Claims> {
        let token = token.ok_or_else(|| AppError::authentication("No token provided"))?;

        match self.decoder.decode_token(token) {
            Ok(claims) => Ok(claims),
            Err(e) => {
                debug!(reason = %e, "Token verification failed");
                Err(AppError::authentication("Failed to authenticate token"))
            }
        }
    }

    /// Verifies the token and returns the protected payload.
    pub fn access_protected_resource(&self, token: Option<&str>) -> AppResult<ProtectedResource> {
        let claims = self.verify(token)?;
        Ok(Self::resource_for(&claims))
    }

    /// Builds the protected payload for already-verified claims.
    pub fn resource_for(claims: &Claims) -> ProtectedResource {
        ProtectedResource {
            message: PROTECTED_MESSAGE.to_string(),
            user: claims.username().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::MemoryUserStore;
    use credgate_core::config::auth::AuthConfig;
    use credgate_core::error::ErrorKind;

    fn make_gate() -> CredentialGate {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_minutes: 60,
        };
        CredentialGate::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(PasswordHasher::new()),
            Arc::new(JwtEncoder::new(&config)),
            Arc::new(JwtDecoder::new(&config)),
        )
    }

    #[tokio::test]
    async fn test_register_login_verify_roundtrip() {
        let gate = make_gate();
        gate.register("alice", "secret123").await.unwrap();

        let issued = gate.login("alice", "secret123").await.unwrap();
        let claims = gate.verify(Some(&issued.token)).unwrap();

        assert_eq!(claims.username(), "alice");
        assert!(!claims.is_expired());
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let gate = make_gate();
        let user = gate.register("alice", "secret123").await.unwrap();

        assert_ne!(user.password_hash, "secret123");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_duplicate_register_conflicts() {
        let gate = make_gate();
        gate.register("alice", "secret123").await.unwrap();

        let err = gate.register("alice", "other").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let gate = make_gate();
        gate.register("alice", "secret123").await.unwrap();

        let err = gate.login("alice", "wrong").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_unknown_user_same_error() {
        let gate = make_gate();

        let err = gate.login("nobody", "secret123").await.unwrap_err();
        assert_eq!(err.message, "Invalid credentials");
    }

    #[tokio::test]
    async fn test_verify_missing_token() {
        let gate = make_gate();

        let err = gate.verify(None).unwrap_err();
        assert_eq!(err.message, "No token provided");
    }

    #[tokio::test]
    async fn test_verify_malformed_token() {
        let gate = make_gate();

        let err = gate.verify(Some("not-a-token")).unwrap_err();
        assert_eq!(err.message, "Failed to authenticate token");
    }

    #[tokio::test]
    async fn test_verify_rejects_foreign_signature() {
        let gate = make_gate();
        gate.register("alice", "secret123").await.unwrap();

        let other = JwtEncoder::new(&AuthConfig {
            jwt_secret: "other-secret".to_string(),
            jwt_ttl_minutes: 60,
        });
        let forged = other.issue("alice").unwrap();

        let err = gate.verify(Some(&forged.token)).unwrap_err();
        assert_eq!(err.message, "Failed to authenticate token");
    }

    #[tokio::test]
    async fn test_access_protected_resource() {
        let gate = make_gate();
        gate.register("alice", "secret123").await.unwrap();
        let issued = gate.login("alice", "secret123").await.unwrap();

        let resource = gate.access_protected_resource(Some(&issued.token)).unwrap();
        assert_eq!(resource.message, "This is a protected resource");
        assert_eq!(resource.user, "alice");

        let err = gate.access_protected_resource(None).unwrap_err();
        assert_eq!(err.message, "No token provided");
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let gate = make_gate();

        assert_eq!(
            gate.register("", "secret123").await.unwrap_err().kind,
            ErrorKind::Validation
        );
        assert_eq!(
            gate.register("alice", "").await.unwrap_err().kind,
            ErrorKind::Validation
        );
    }
}
