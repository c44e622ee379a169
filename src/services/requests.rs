//! Asset request service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        request::{AssetRequest, CreateAssetRequest, RequestStatus},
        user::UserClaims,
    },
    store::Store,
};

#[derive(Clone)]
pub struct RequestsService {
    store: Store,
}

impl RequestsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All requests (manager view), most recent first
    pub async fn list(&self) -> Vec<AssetRequest> {
        self.store.requests.list().await
    }

    /// Requests filed by the acting identity
    pub async fn list_for_user(&self, user_id: &str) -> Vec<AssetRequest> {
        self.store.requests.list_for_user(user_id).await
    }

    /// File a new request attributed to the acting identity. The requester's
    /// display name is snapshotted at creation time.
    pub async fn create(
        &self,
        claims: &UserClaims,
        payload: CreateAssetRequest,
    ) -> AppResult<AssetRequest> {
        let user = self.store.users.get(&claims.user_id).await?;

        let request = AssetRequest {
            id: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            user_name: user.display_name(),
            asset_type: payload.asset_type,
            reason: payload.reason,
            status: RequestStatus::Pending,
            date: Utc::now(),
            updated_at: None,
        };
        self.store.requests.insert(request.clone()).await;
        tracing::info!(request_id = %request.id, user_id = %user.id, "Request filed");
        Ok(request)
    }

    /// Resolve a pending request (manager)
    pub async fn set_status(&self, id: &str, status: RequestStatus) -> AppResult<AssetRequest> {
        let request = self.store.requests.set_status(id, status, Utc::now()).await?;
        tracing::info!(request_id = %id, status = %status, "Request resolved");
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, seed, services::auth::AuthService, config::AuthConfig};

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
    async fn create_prepends_a_pending_request() {
        let (store, claims) = seeded().await;
        let svc = RequestsService::new(store);

        let created = svc
            .create(
                &claims,
                CreateAssetRequest {
                    asset_type: "Laptop".to_string(),
                    reason: "old laptop broken".to_string(),
                },
            )
            .await
            .unwrap();

        let mine = svc.list_for_user(&claims.user_id).await;
        assert_eq!(mine[0].id, created.id);
        assert_eq!(mine[0].asset_type, "Laptop");
        assert_eq!(mine[0].status, RequestStatus::Pending);
        assert_eq!(mine[0].user_name, "Alice Johnson");
    }

    #[tokio::test]
    async fn manager_approval_is_visible_to_the_requester() {
        let (store, claims) = seeded().await;
        let svc = RequestsService::new(store);

        let created = svc
            .create(
                &claims,
                CreateAssetRequest {
                    asset_type: "Laptop".to_string(),
                    reason: "old laptop broken".to_string(),
                },
            )
            .await
            .unwrap();

        svc.set_status(&created.id, RequestStatus::Approved)
            .await
            .unwrap();

        let mine = svc.list_for_user(&claims.user_id).await;
        let request = mine.iter().find(|r| r.id == created.id).unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert!(request.updated_at.unwrap() > request.date);
    }

    #[tokio::test]
    async fn resolving_an_unknown_request_is_not_found() {
        let (store, _) = seeded().await;
        let svc = RequestsService::new(store);

        let err = svc
            .set_status("missing", RequestStatus::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
