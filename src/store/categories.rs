//! Category collection

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::category::Category;

/// In-memory category collection.
///
/// Names are not unique and are referenced by assets by value, so the two
/// may drift; both behaviors are deliberate.
#[derive(Clone, Default)]
pub struct CategoriesStore {
    inner: Arc<RwLock<Vec<Category>>>,
}

impl CategoriesStore {
    /// All categories, in insertion order
    pub async fn list(&self) -> Vec<Category> {
        self.inner.read().await.clone()
    }

    /// Append a new category
    pub async fn insert(&self, category: Category) {
        self.inner.write().await.push(category);
    }

    /// Number of categories
    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_names_are_accepted() {
        let store = CategoriesStore::default();
        for id in ["cat1", "cat2"] {
            store
                .insert(Category {
                    id: id.to_string(),
                    name: "Monitors".to_string(),
                    description: "Display devices".to_string(),
                })
                .await;
        }
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn insert_appends_in_order() {
        let store = CategoriesStore::default();
        store
            .insert(Category {
                id: "cat1".to_string(),
                name: "Laptops".to_string(),
                description: String::new(),
            })
            .await;
        store
            .insert(Category {
                id: "cat2".to_string(),
                name: "Monitors".to_string(),
                description: String::new(),
            })
            .await;

        let all = store.list().await;
        assert_eq!(all[0].name, "Laptops");
        assert_eq!(all[1].name, "Monitors");
    }
}
