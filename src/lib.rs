//! AssetDesk Asset Management Dashboard
//!
//! A Rust implementation of the AssetDesk asset management dashboard
//! backend, providing a REST JSON API over an in-memory, seed-initialized
//! entity store. End users request and report issues on assigned equipment,
//! managers assign assets and resolve requests, admins manage inventory,
//! categories, and reports.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
