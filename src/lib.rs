//! Conecta library management server
//!
//! REST JSON API over users, catalog items and reservations, backed by
//! PostgreSQL or by an in-process store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, &config.reservations);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
