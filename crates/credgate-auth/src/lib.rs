//! # credgate-auth
//!
//! Credential and session gate for CredGate.
//!
//! ## Modules
//!
//! - `user` — credential records and the injectable user store
//! - `password` — Argon2id password hashing and verification
//! - `jwt` — JWT token creation, validation, and claims
//! - `gate` — the register/login/verify orchestration

pub mod gate;
pub mod jwt;
pub mod password;
pub mod user;

pub use gate::CredentialGate;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use user::{MemoryUserStore, User, UserStore};
