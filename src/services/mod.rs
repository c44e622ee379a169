//! Business logic services

pub mod assets;
pub mod auth;
pub mod categories;
pub mod complaints;
pub mod employees;
pub mod requests;
pub mod stats;

use crate::{config::AuthConfig, store::Store};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub assets: assets::AssetsService,
    pub requests: requests::RequestsService,
    pub complaints: complaints::ComplaintsService,
    pub employees: employees::EmployeesService,
    pub categories: categories::CategoriesService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Store, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(store.clone(), auth_config),
            assets: assets::AssetsService::new(store.clone()),
            requests: requests::RequestsService::new(store.clone()),
            complaints: complaints::ComplaintsService::new(store.clone()),
            employees: employees::EmployeesService::new(store.clone()),
            categories: categories::CategoriesService::new(store.clone()),
            stats: stats::StatsService::new(store),
        }
    }
}
