//! Authentication service
//!
//! Credentials are compared in plaintext against the seeded identity list.
//! There is no credential backend behind this server, so no hashing,
//! lockout, or rate limiting applies; a failed login is indistinguishable
//! between wrong email and wrong password.

use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{PublicUser, UserClaims},
    store::Store,
};

#[derive(Clone)]
pub struct AuthService {
    store: Store,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(store: Store, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Authenticate by email and password, returning a JWT token and the
    /// password-stripped identity
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, PublicUser)> {
        let user = self
            .store
            .users
            .find_by_email(email)
            .await
            .filter(|u| u.password == password)
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.email.clone(),
            user_id: user.id.clone(),
            role: user.role,
            exp,
            iat: now,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok((token, user.public()))
    }

    /// Resolve the identity behind a set of verified claims
    pub async fn current_user(&self, claims: &UserClaims) -> AppResult<PublicUser> {
        let user = self
            .store
            .users
            .get(&claims.user_id)
            .await
            .map_err(|_| AppError::Authentication("Unknown identity".to_string()))?;
        Ok(user.public())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::user::Role, seed};

    async fn service() -> AuthService {
        let store = Store::new();
        seed::seed(&store).await;
        AuthService::new(store, AuthConfig::default())
    }

    #[tokio::test]
    async fn login_with_seeded_credentials_succeeds() {
        let auth = service().await;
        let (token, user) = auth
            .authenticate("alice@example.com", "password123")
            .await
            .unwrap();

        assert!(!token.is_empty());
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, Role::User);

        // Token round-trips into claims for the same identity
        let claims = UserClaims::from_token(&token, &AuthConfig::default().jwt_secret).unwrap();
        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.role, Role::User);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_fail_alike() {
        let auth = service().await;

        let wrong_password = auth
            .authenticate("alice@example.com", "nope")
            .await
            .unwrap_err();
        let unknown_email = auth
            .authenticate("nobody@example.com", "password123")
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(wrong_password, AppError::Authentication(_)));
    }
}
