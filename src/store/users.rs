//! User (identity) collection

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::user::User,
};

/// In-memory loginable identity list, populated once from the seed dataset.
/// Kept separate from the employee collection with no referential
/// enforcement between the two.
#[derive(Clone, Default)]
pub struct UsersStore {
    inner: Arc<RwLock<Vec<User>>>,
}

impl UsersStore {
    /// All identities
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.clone()
    }

    /// Get an identity by id
    pub async fn get(&self, id: &str) -> AppResult<User> {
        self.inner
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Find an identity by email, if any
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Add an identity (seed-time only; there is no runtime user creation)
    pub async fn insert(&self, user: User) {
        self.inner.write().await.push(user);
    }
}
