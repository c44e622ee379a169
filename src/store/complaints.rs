//! Complaint collection

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::complaint::{Complaint, ComplaintStatus},
};

/// In-memory complaint collection. Status values carry no transition order;
/// any of the three may be set at any time.
#[derive(Clone, Default)]
pub struct ComplaintsStore {
    inner: Arc<RwLock<Vec<Complaint>>>,
}

impl ComplaintsStore {
    /// All complaints, most recent first
    pub async fn list(&self) -> Vec<Complaint> {
        self.inner.read().await.clone()
    }

    /// Get a complaint by id
    pub async fn get(&self, id: &str) -> AppResult<Complaint> {
        self.inner
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Complaint {} not found", id)))
    }

    /// Complaints filed by the given identity, most recent first
    pub async fn list_for_user(&self, user_id: &str) -> Vec<Complaint> {
        self.inner
            .read()
            .await
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Prepend a new complaint (most-recent-first ordering)
    pub async fn insert(&self, complaint: Complaint) {
        self.inner.write().await.insert(0, complaint);
    }

    /// Set the status and stamp `updated_at`
    pub async fn set_status(
        &self,
        id: &str,
        status: ComplaintStatus,
        at: DateTime<Utc>,
    ) -> AppResult<Complaint> {
        let mut complaints = self.inner.write().await;
        let complaint = complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Complaint {} not found", id)))?;

        complaint.status = status;
        complaint.updated_at = Some(at);
        Ok(complaint.clone())
    }

    /// Number of complaints
    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> Complaint {
        Complaint {
            id: id.to_string(),
            user_id: "u1".to_string(),
            user_name: "Alice Johnson".to_string(),
            asset_id: "a1".to_string(),
            asset_name: "MacBook Pro".to_string(),
            description: "Screen flickers".to_string(),
            status: ComplaintStatus::Open,
            date: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn set_status_is_idempotent() {
        let store = ComplaintsStore::default();
        store.insert(sample("c1")).await;

        let first = store
            .set_status("c1", ComplaintStatus::Resolved, Utc::now())
            .await
            .unwrap();
        let second_at = Utc::now() + chrono::Duration::milliseconds(5);
        let second = store
            .set_status("c1", ComplaintStatus::Resolved, second_at)
            .await
            .unwrap();

        assert_eq!(first.status, second.status);
        assert_eq!(second.updated_at, Some(second_at));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn statuses_are_freely_settable() {
        let store = ComplaintsStore::default();
        store.insert(sample("c1")).await;

        store
            .set_status("c1", ComplaintStatus::Resolved, Utc::now())
            .await
            .unwrap();
        // Reopening a resolved complaint is allowed
        let reopened = store
            .set_status("c1", ComplaintStatus::Open, Utc::now())
            .await
            .unwrap();
        assert_eq!(reopened.status, ComplaintStatus::Open);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = ComplaintsStore::default();
        let err = store
            .set_status("missing", ComplaintStatus::Open, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
