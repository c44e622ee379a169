//! In-memory entity store
//!
//! Owns the entity collections (assets, requests, complaints, employees,
//! categories, users) behind per-collection `tokio::sync::RwLock`s. The
//! store is an explicitly constructed handle injected into services; nothing
//! else mutates the collections. Collection-level invariants (assignment
//! consistency, non-negative stock, request transition order) are enforced
//! here; cross-collection policy lives in the service layer.

pub mod assets;
pub mod categories;
pub mod complaints;
pub mod employees;
pub mod requests;
pub mod users;

/// Main store struct holding all entity collections
#[derive(Clone, Default)]
pub struct Store {
    pub assets: assets::AssetsStore,
    pub requests: requests::RequestsStore,
    pub complaints: complaints::ComplaintsStore,
    pub employees: employees::EmployeesStore,
    pub categories: categories::CategoriesStore,
    pub users: users::UsersStore,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}
