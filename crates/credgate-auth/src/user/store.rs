//! User store trait and the in-memory implementation.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use credgate_core::error::AppError;
use credgate_core::result::AppResult;

use super::model::User;

/// Storage abstraction for credential records.
///
/// The gate only ever looks records up by exact username and inserts new
/// ones; records are immutable once stored. Tests substitute their own
/// implementation instead of relying on process-wide state.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a record by exact, case-sensitive username match.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new record. Fails with a conflict if the username is taken.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Count stored records.
    async fn count(&self) -> AppResult<u64>;
}

/// In-memory user store backed by a concurrent map.
///
/// All records are lost on process restart. The map's sharded locking
/// makes concurrent registration safe: exactly one of two racing inserts
/// for the same username succeeds.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    /// Records keyed by username.
    users: DashMap<String, User>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.get(username).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                user.username
            ))),
            Entry::Vacant(entry) => {
                entry.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credgate_core::error::ErrorKind;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryUserStore::new();
        store
            .insert(User::new("alice", "hash".to_string()))
            .await
            .unwrap();

        let found = store.find_by_username("alice").await.unwrap();
        assert_eq!(found.unwrap().username, "alice");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_is_case_sensitive() {
        let store = MemoryUserStore::new();
        store
            .insert(User::new("alice", "hash".to_string()))
            .await
            .unwrap();

        assert!(store.find_by_username("Alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let store = MemoryUserStore::new();
        store
            .insert(User::new("alice", "hash1".to_string()))
            .await
            .unwrap();

        let err = store
            .insert(User::new("alice", "hash2".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
