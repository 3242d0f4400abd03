//! Credential records and the injectable user store.

pub mod model;
pub mod store;

pub use model::User;
pub use store::{MemoryUserStore, UserStore};
