//! Asset collection

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::asset::{Asset, AssetStatus},
};

/// In-memory asset collection.
///
/// Guards the assignment invariant: `assigned_to` and `assigned_at` are set
/// if and only if the status is `Assigned`.
#[derive(Clone, Default)]
pub struct AssetsStore {
    inner: Arc<RwLock<Vec<Asset>>>,
}

impl AssetsStore {
    /// All assets, most recent first
    pub async fn list(&self) -> Vec<Asset> {
        self.inner.read().await.clone()
    }

    /// Get an asset by id
    pub async fn get(&self, id: &str) -> AppResult<Asset> {
        self.inner
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Assets currently assigned to the given identity
    pub async fn list_assigned_to(&self, user_id: &str) -> Vec<Asset> {
        self.inner
            .read()
            .await
            .iter()
            .filter(|a| a.assigned_to.as_deref() == Some(user_id))
            .cloned()
            .collect()
    }

    /// Insert a new asset at the front of the collection (most-recent-first)
    pub async fn insert(&self, asset: Asset) {
        self.inner.write().await.insert(0, asset);
    }

    /// Assign an asset to an identity.
    ///
    /// Only an available asset may be assigned: an assigned asset must be
    /// deleted or freed first, and a maintenance asset is not handed out.
    pub async fn assign(
        &self,
        id: &str,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> AppResult<Asset> {
        let mut assets = self.inner.write().await;
        let asset = assets
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;

        match asset.status {
            AssetStatus::Assigned => {
                return Err(AppError::AssetAssigned(format!(
                    "Asset {} is already assigned",
                    id
                )))
            }
            AssetStatus::Maintenance => {
                return Err(AppError::AssetNotAvailable(format!(
                    "Asset {} is under maintenance",
                    id
                )))
            }
            AssetStatus::Available => {}
        }

        asset.assigned_to = Some(user_id.to_string());
        asset.assigned_at = Some(at);
        asset.status = AssetStatus::Assigned;
        Ok(asset.clone())
    }

    /// Add a signed delta to an asset's quantity.
    ///
    /// Stock is tracked independently from assignment; a delta that
    /// overflows or would drive the quantity negative is rejected.
    pub async fn adjust_quantity(&self, id: &str, delta: i32) -> AppResult<Asset> {
        let mut assets = self.inner.write().await;
        let asset = assets
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;

        let new_quantity = asset.quantity.checked_add(delta).ok_or_else(|| {
            AppError::Validation(format!(
                "Delta {} overflows the quantity of asset {} (current {})",
                delta, id, asset.quantity
            ))
        })?;
        if new_quantity < 0 {
            return Err(AppError::InsufficientQuantity(format!(
                "Quantity of asset {} cannot go below zero (current {}, delta {})",
                id, asset.quantity, delta
            )));
        }

        asset.quantity = new_quantity;
        Ok(asset.clone())
    }

    /// Remove an asset permanently.
    ///
    /// An assigned asset cannot be deleted; it would leave a live assignment
    /// pointing at nothing.
    pub async fn remove(&self, id: &str) -> AppResult<Asset> {
        let mut assets = self.inner.write().await;
        let pos = assets
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;

        if assets[pos].status == AssetStatus::Assigned {
            return Err(AppError::AssetAssigned(format!(
                "Asset {} is assigned and cannot be deleted",
                id
            )));
        }

        Ok(assets.remove(pos))
    }

    /// Number of assets
    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> Asset {
        Asset {
            id: id.to_string(),
            name: format!("Asset {}", id),
            description: String::new(),
            category: "Laptops".to_string(),
            serial_number: format!("SN-{}", id),
            quantity: 3,
            purchase_price: 1000.0,
            image: String::new(),
            status: AssetStatus::Available,
            assigned_to: None,
            assigned_at: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn assign_sets_all_assignment_fields() {
        let store = AssetsStore::default();
        store.insert(sample("a1")).await;

        let asset = store.assign("a1", "u1", Utc::now()).await.unwrap();
        assert_eq!(asset.status, AssetStatus::Assigned);
        assert_eq!(asset.assigned_to.as_deref(), Some("u1"));
        assert!(asset.assigned_at.is_some());
        assert!(asset.assignment_consistent());
    }

    #[tokio::test]
    async fn assign_rejects_already_assigned_asset() {
        let store = AssetsStore::default();
        store.insert(sample("a1")).await;
        store.assign("a1", "u1", Utc::now()).await.unwrap();

        let err = store.assign("a1", "u2", Utc::now()).await.unwrap_err();
        assert!(matches!(err, AppError::AssetAssigned(_)));

        // First assignment untouched
        let asset = store.get("a1").await.unwrap();
        assert_eq!(asset.assigned_to.as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn assign_rejects_maintenance_asset() {
        let store = AssetsStore::default();
        let mut asset = sample("a1");
        asset.status = AssetStatus::Maintenance;
        store.insert(asset).await;

        let err = store.assign("a1", "u1", Utc::now()).await.unwrap_err();
        assert!(matches!(err, AppError::AssetNotAvailable(_)));
    }

    #[tokio::test]
    async fn adjust_quantity_applies_delta_both_ways() {
        let store = AssetsStore::default();
        store.insert(sample("a1")).await;

        assert_eq!(store.adjust_quantity("a1", 4).await.unwrap().quantity, 7);
        assert_eq!(store.adjust_quantity("a1", -7).await.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn adjust_quantity_rejects_negative_result() {
        let store = AssetsStore::default();
        store.insert(sample("a1")).await;

        let err = store.adjust_quantity("a1", -4).await.unwrap_err();
        assert!(matches!(err, AppError::InsufficientQuantity(_)));
        assert_eq!(store.get("a1").await.unwrap().quantity, 3);

        // A large negative delta takes the same rejection, not an overflow
        let err = store.adjust_quantity("a1", i32::MIN).await.unwrap_err();
        assert!(matches!(err, AppError::InsufficientQuantity(_)));
    }

    #[tokio::test]
    async fn adjust_quantity_rejects_overflowing_delta() {
        let store = AssetsStore::default();
        store.insert(sample("a1")).await;

        let err = store.adjust_quantity("a1", i32::MAX).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.get("a1").await.unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn remove_deletes_exactly_one_record() {
        let store = AssetsStore::default();
        store.insert(sample("a1")).await;
        store.insert(sample("a2")).await;

        store.remove("a1").await.unwrap();
        assert_eq!(store.count().await, 1);
        assert!(matches!(
            store.get("a1").await.unwrap_err(),
            AppError::NotFound(_)
        ));

        // Assigning a removed asset fails with reference-not-found
        let err = store.assign("a1", "u1", Utc::now()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn remove_rejects_assigned_asset() {
        let store = AssetsStore::default();
        store.insert(sample("a1")).await;
        store.assign("a1", "u1", Utc::now()).await.unwrap();

        let err = store.remove("a1").await.unwrap_err();
        assert!(matches!(err, AppError::AssetAssigned(_)));
        assert_eq!(store.count().await, 1);
    }
}
