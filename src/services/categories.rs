//! Category management service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::category::{Category, CreateCategory},
    store::Store,
};

#[derive(Clone)]
pub struct CategoriesService {
    store: Store,
}

impl CategoriesService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All categories, in insertion order
    pub async fn list(&self) -> Vec<Category> {
        self.store.categories.list().await
    }

    /// Add a category. Duplicate names are accepted; the name is a display
    /// value, not a key.
    pub async fn add(&self, payload: CreateCategory) -> AppResult<Category> {
        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            description: payload.description,
        };
        self.store.categories.insert(category.clone()).await;
        tracing::info!(category_id = %category.id, name = %category.name, "Category added");
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn add_grows_the_list_without_duplicate_rejection() {
        let store = Store::new();
        seed::seed(&store).await;
        let svc = CategoriesService::new(store);

        let before = svc.list().await.len();
        svc.add(CreateCategory {
            name: "Monitors".to_string(),
            description: "Display devices".to_string(),
        })
        .await
        .unwrap();
        svc.add(CreateCategory {
            name: "Monitors".to_string(),
            description: "Duplicate on purpose".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(svc.list().await.len(), before + 2);
    }
}
