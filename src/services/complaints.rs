//! Complaint service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        complaint::{Complaint, ComplaintStatus, CreateComplaint},
        user::UserClaims,
    },
    store::Store,
};

#[derive(Clone)]
pub struct ComplaintsService {
    store: Store,
}

impl ComplaintsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All complaints (manager view), most recent first
    pub async fn list(&self) -> Vec<Complaint> {
        self.store.complaints.list().await
    }

    /// Complaints filed by the acting identity
    pub async fn list_for_user(&self, user_id: &str) -> Vec<Complaint> {
        self.store.complaints.list_for_user(user_id).await
    }

    /// File a complaint against an existing asset. The asset must exist at
    /// creation time; its name is snapshotted so the complaint survives a
    /// later deletion of the asset.
    pub async fn create(
        &self,
        claims: &UserClaims,
        payload: CreateComplaint,
    ) -> AppResult<Complaint> {
        let user = self.store.users.get(&claims.user_id).await?;
        let asset = self.store.assets.get(&payload.asset_id).await?;

        let complaint = Complaint {
            id: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            user_name: user.display_name(),
            asset_id: asset.id,
            asset_name: asset.name,
            description: payload.description,
            status: ComplaintStatus::Open,
            date: Utc::now(),
            updated_at: None,
        };
        self.store.complaints.insert(complaint.clone()).await;
        tracing::info!(complaint_id = %complaint.id, user_id = %user.id, "Complaint filed");
        Ok(complaint)
    }

    /// Set a complaint's status (manager)
    pub async fn set_status(&self, id: &str, status: ComplaintStatus) -> AppResult<Complaint> {
        let complaint = self.store.complaints.set_status(id, status, Utc::now()).await?;
        tracing::info!(complaint_id = %id, status = %status, "Complaint status updated");
        Ok(complaint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AuthConfig, error::AppError, seed, services::auth::AuthService,
    };

    async fn seeded() -> (Store, UserClaims) {
        let store = Store::new();
        seed::seed(&store).await;
        let auth = AuthService::new(store.clone(), AuthConfig::default());
        let (token, _) = auth
            .authenticate("alice@example.com", "password123")
            .await
            .unwrap();
        let claims =
            UserClaims::from_token(&token, &AuthConfig::default().jwt_secret).unwrap();
        (store, claims)
    }

    #[tokio::test]
    async fn create_snapshots_the_asset_name() {
        let (store, claims) = seeded().await;
        let asset = store.assets.list().await.into_iter().next().unwrap();
        let svc = ComplaintsService::new(store);

        let complaint = svc
            .create(
                &claims,
                CreateComplaint {
                    asset_id: asset.id.clone(),
                    description: "Does not power on".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(complaint.asset_name, asset.name);
        assert_eq!(complaint.status, ComplaintStatus::Open);
        assert_eq!(svc.list_for_user(&claims.user_id).await[0].id, complaint.id);
    }

    #[tokio::test]
    async fn create_against_unknown_asset_is_not_found() {
        let (store, claims) = seeded().await;
        let svc = ComplaintsService::new(store);

        let err = svc
            .create(
                &claims,
                CreateComplaint {
                    asset_id: "missing".to_string(),
                    description: "Does not power on".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn complaint_survives_asset_deletion() {
        let (store, claims) = seeded().await;
        let available = store
            .assets
            .list()
            .await
            .into_iter()
            .find(|a| a.assigned_to.is_none())
            .unwrap();
        let svc = ComplaintsService::new(store.clone());

        let complaint = svc
            .create(
                &claims,
                CreateComplaint {
                    asset_id: available.id.clone(),
                    description: "Scratched casing".to_string(),
                },
            )
            .await
            .unwrap();

        store.assets.remove(&available.id).await.unwrap();

        // Snapshot fields keep the complaint self-describing
        let kept = store.complaints.get(&complaint.id).await.unwrap();
        assert_eq!(kept.asset_name, available.name);
        assert_eq!(kept.asset_id, available.id);
    }
}
