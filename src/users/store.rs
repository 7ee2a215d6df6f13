//! `UserStore` — backend-agnostic seam for loading user snapshots.
//!
//! The real platform keeps users in a relational database behind an ORM;
//! that layer is an external collaborator. Routes only need `get_user`, so
//! the trait stays small and an in-memory implementation backs tests and
//! local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;

use super::model::User;

/// Async source of user snapshots.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by id. `Ok(None)` when the id is unknown.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert or replace a user record.
    async fn upsert_user(&self, user: User) -> Result<(), StoreError>;

    /// List all users.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

/// In-memory store. Not persistent; intended for tests and demos.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn upsert_user(&self, user: User) -> Result<(), StoreError> {
        self.users.write().await.insert(user.id, user);
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::model::Role;

    #[tokio::test]
    async fn get_unknown_user_is_none() {
        let store = InMemoryUserStore::new();
        assert!(store.get_user(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_then_get() {
        let store = InMemoryUserStore::new();
        let user = User::new(Role::Agent);
        let id = user.id;
        store.upsert_user(user).await.unwrap();

        let loaded = store.get_user(id).await.unwrap().unwrap();
        assert_eq!(loaded.id, id);
        assert_eq!(loaded.role, Role::Agent);
    }

    #[tokio::test]
    async fn upsert_replaces_existing() {
        let store = InMemoryUserStore::new();
        let mut user = User::new(Role::Client);
        let id = user.id;
        store.upsert_user(user.clone()).await.unwrap();

        user.phone_verified = true;
        store.upsert_user(user).await.unwrap();

        let loaded = store.get_user(id).await.unwrap().unwrap();
        assert!(loaded.phone_verified);
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_orders_by_creation() {
        let store = InMemoryUserStore::new();
        let first = User::new(Role::Client);
        let second = User::new(Role::Inspector);
        let first_id = first.id;
        store.upsert_user(second).await.unwrap();
        store.upsert_user(first.clone()).await.unwrap();

        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        // `first` was constructed before `second`
        assert_eq!(users[0].id, first_id);
    }
}
