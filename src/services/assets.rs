//! Asset management service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::asset::{Asset, AssetStatus, CreateAsset},
    store::Store,
};

#[derive(Clone)]
pub struct AssetsService {
    store: Store,
}

impl AssetsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All assets
    pub async fn list(&self) -> Vec<Asset> {
        self.store.assets.list().await
    }

    /// Get an asset by id
    pub async fn get(&self, id: &str) -> AppResult<Asset> {
        self.store.assets.get(id).await
    }

    /// Assets assigned to the given identity
    pub async fn list_for_user(&self, user_id: &str) -> Vec<Asset> {
        self.store.assets.list_assigned_to(user_id).await
    }

    /// Add a new asset. The status is always forced to available, whatever
    /// the caller sends.
    pub async fn add_asset(&self, payload: CreateAsset) -> AppResult<Asset> {
        let asset = Asset {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            description: payload.description,
            category: payload.category,
            serial_number: payload.serial_number,
            quantity: payload.quantity,
            purchase_price: payload.purchase_price,
            image: payload.image,
            status: AssetStatus::Available,
            assigned_to: None,
            assigned_at: None,
            created_at: Utc::now(),
        };
        self.store.assets.insert(asset.clone()).await;
        tracing::info!(asset_id = %asset.id, name = %asset.name, "Asset added");
        Ok(asset)
    }

    /// Assign an available asset to an identity.
    ///
    /// The target id is a weak reference (it may point at an employee
    /// without a login); it is not validated against the identity list.
    /// Quantity is not decremented: assignment and stock tracking are
    /// independent.
    pub async fn assign(&self, asset_id: &str, user_id: &str) -> AppResult<Asset> {
        let asset = self.store.assets.assign(asset_id, user_id, Utc::now()).await?;
        tracing::info!(asset_id = %asset_id, user_id = %user_id, "Asset assigned");
        Ok(asset)
    }

    /// Adjust an asset's stock by a signed delta
    pub async fn adjust_quantity(&self, asset_id: &str, delta: i32) -> AppResult<Asset> {
        self.store.assets.adjust_quantity(asset_id, delta).await
    }

    /// Delete an asset permanently. Complaints referencing it keep their
    /// snapshot fields and a dangling asset id.
    pub async fn delete(&self, asset_id: &str) -> AppResult<()> {
        let asset = self.store.assets.remove(asset_id).await?;
        tracing::info!(asset_id = %asset_id, name = %asset.name, "Asset deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn create_payload(name: &str) -> CreateAsset {
        CreateAsset {
            name: name.to_string(),
            description: "test".to_string(),
            category: "Laptops".to_string(),
            serial_number: "SN-1".to_string(),
            quantity: 2,
            purchase_price: 500.0,
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn added_assets_are_always_available() {
        let svc = AssetsService::new(Store::new());
        let asset = svc.add_asset(create_payload("ThinkPad")).await.unwrap();

        assert_eq!(asset.status, AssetStatus::Available);
        assert!(asset.assigned_to.is_none());
        assert!(asset.assignment_consistent());
    }

    #[tokio::test]
    async fn add_prepends_to_the_collection() {
        let svc = AssetsService::new(Store::new());
        svc.add_asset(create_payload("First")).await.unwrap();
        svc.add_asset(create_payload("Second")).await.unwrap();

        let all = svc.list().await;
        assert_eq!(all[0].name, "Second");
        assert_eq!(all[1].name, "First");
    }

    #[tokio::test]
    async fn assign_then_user_view_includes_the_asset() {
        let svc = AssetsService::new(Store::new());
        let asset = svc.add_asset(create_payload("ThinkPad")).await.unwrap();

        svc.assign(&asset.id, "u1").await.unwrap();

        let mine = svc.list_for_user("u1").await;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, asset.id);
        assert_eq!(mine[0].status, AssetStatus::Assigned);
    }

    #[tokio::test]
    async fn assignment_does_not_touch_quantity() {
        let svc = AssetsService::new(Store::new());
        let asset = svc.add_asset(create_payload("ThinkPad")).await.unwrap();

        let assigned = svc.assign(&asset.id, "u1").await.unwrap();
        assert_eq!(assigned.quantity, asset.quantity);
    }

    #[tokio::test]
    async fn delete_then_assign_is_not_found() {
        let svc = AssetsService::new(Store::new());
        let asset = svc.add_asset(create_payload("ThinkPad")).await.unwrap();

        svc.delete(&asset.id).await.unwrap();
        let err = svc.assign(&asset.id, "u1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
