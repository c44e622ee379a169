//! Asset request collection

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::request::{AssetRequest, RequestStatus},
};

/// In-memory request collection.
///
/// Guards the transition order: a request only moves out of pending, and
/// approved/rejected are terminal.
#[derive(Clone, Default)]
pub struct RequestsStore {
    inner: Arc<RwLock<Vec<AssetRequest>>>,
}

impl RequestsStore {
    /// All requests, most recent first
    pub async fn list(&self) -> Vec<AssetRequest> {
        self.inner.read().await.clone()
    }

    /// Get a request by id
    pub async fn get(&self, id: &str) -> AppResult<AssetRequest> {
        self.inner
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Requests filed by the given identity, most recent first
    pub async fn list_for_user(&self, user_id: &str) -> Vec<AssetRequest> {
        self.inner
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Prepend a new request (most-recent-first ordering)
    pub async fn insert(&self, request: AssetRequest) {
        self.inner.write().await.insert(0, request);
    }

    /// Move a request out of pending and stamp `updated_at`
    pub async fn set_status(
        &self,
        id: &str,
        status: RequestStatus,
        at: DateTime<Utc>,
    ) -> AppResult<AssetRequest> {
        let mut requests = self.inner.write().await;
        let request = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))?;

        if request.status.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "Request {} is already {} and cannot change status",
                id, request.status
            )));
        }
        if status == RequestStatus::Pending {
            return Err(AppError::InvalidTransition(
                "A request cannot be set back to pending".to_string(),
            ));
        }

        request.status = status;
        request.updated_at = Some(at);
        Ok(request.clone())
    }

    /// Number of requests
    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, user_id: &str) -> AssetRequest {
        AssetRequest {
            id: id.to_string(),
            user_id: user_id.to_string(),
            user_name: "Alice Johnson".to_string(),
            asset_type: "Laptop".to_string(),
            reason: "old laptop broken".to_string(),
            status: RequestStatus::Pending,
            date: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn insert_prepends() {
        let store = RequestsStore::default();
        store.insert(sample("r1", "u1")).await;
        store.insert(sample("r2", "u1")).await;

        let view = store.list_for_user("u1").await;
        assert_eq!(view[0].id, "r2");
        assert_eq!(view[1].id, "r1");
    }

    #[tokio::test]
    async fn approve_stamps_updated_at_after_date() {
        let store = RequestsStore::default();
        store.insert(sample("r1", "u1")).await;

        let created = store.get("r1").await.unwrap();
        let later = created.date + chrono::Duration::milliseconds(5);
        let updated = store
            .set_status("r1", RequestStatus::Approved, later)
            .await
            .unwrap();

        assert_eq!(updated.status, RequestStatus::Approved);
        assert!(updated.updated_at.unwrap() > updated.date);
    }

    #[tokio::test]
    async fn terminal_requests_cannot_change_status() {
        let store = RequestsStore::default();
        store.insert(sample("r1", "u1")).await;
        store
            .set_status("r1", RequestStatus::Rejected, Utc::now())
            .await
            .unwrap();

        let err = store
            .set_status("r1", RequestStatus::Approved, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
        assert_eq!(store.get("r1").await.unwrap().status, RequestStatus::Rejected);
    }

    #[tokio::test]
    async fn pending_is_not_a_transition_target() {
        let store = RequestsStore::default();
        store.insert(sample("r1", "u1")).await;

        let err = store
            .set_status("r1", RequestStatus::Pending, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
    }
}
