//! Argon2id password hashing and verification.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use credgate_core::error::AppError;
use credgate_core::result::AppResult;

/// Hashes and verifies passwords using Argon2id with default parameters.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// Returns the hash in PHC string format, which embeds the salt and
    /// the Argon2 parameters used.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored PHC hash string.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// A hash that does not parse is an internal error, not a mismatch.
    pub fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("secret123").unwrap();

        assert_ne!(hash, "secret123");
        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify_password("secret123", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("secret123").unwrap();

        assert!(!hasher.verify_password("secret124", &hash).unwrap());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash_password("secret123").unwrap();
        let b = hasher.hash_password("secret123").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify_password("secret123", "not-a-hash").is_err());
    }
}
