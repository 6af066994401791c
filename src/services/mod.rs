//! Business logic services

pub mod catalog;
pub mod reservations;
pub mod users;

use crate::{config::ReservationsConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub reservations: reservations::ReservationsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, reservations_config: &ReservationsConfig) -> Self {
        Self {
            users: users::UsersService::new(repository.users.clone()),
            catalog: catalog::CatalogService::new(repository.catalog.clone()),
            reservations: reservations::ReservationsService::new(
                repository.reservations.clone(),
                repository.users.clone(),
                repository.catalog.clone(),
                reservations_config.validate_references,
            ),
            repository,
        }
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
