//! Reservation service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::reservation::Reservation,
    repository::{CatalogRepository, ReservationsRepository, UsersRepository},
};

#[derive(Clone)]
pub struct ReservationsService {
    repository: Arc<dyn ReservationsRepository>,
    users: Arc<dyn UsersRepository>,
    catalog: Arc<dyn CatalogRepository>,
    validate_references: bool,
}

impl ReservationsService {
    pub fn new(
        repository: Arc<dyn ReservationsRepository>,
        users: Arc<dyn UsersRepository>,
        catalog: Arc<dyn CatalogRepository>,
        validate_references: bool,
    ) -> Self {
        Self {
            repository,
            users,
            catalog,
            validate_references,
        }
    }

    /// List all reservations
    pub async fn list_all(&self) -> AppResult<Vec<Reservation>> {
        self.repository.find_all().await
    }

    /// Create a reservation; any client-supplied id is discarded.
    ///
    /// User and item references are only checked when `validate_references`
    /// is enabled.
    pub async fn create(&self, reservation: Reservation) -> AppResult<Reservation> {
        if self.validate_references {
            self.check_references(&reservation).await?;
        }

        let created = self
            .repository
            .save(Reservation {
                reservation_id: None,
                ..reservation
            })
            .await?;
        tracing::info!(
            "Reservation created: id={:?} user={:?} item={:?}",
            created.reservation_id,
            created.user_id,
            created.catalog_item_id
        );
        Ok(created)
    }

    async fn check_references(&self, reservation: &Reservation) -> AppResult<()> {
        let user_id = reservation
            .user_id
            .ok_or_else(|| AppError::BusinessRule("userId is required".to_string()))?;
        if !self.users.exists_by_id(user_id).await? {
            return Err(AppError::BusinessRule(format!("User {} does not exist", user_id)));
        }

        let item_id = reservation
            .catalog_item_id
            .ok_or_else(|| AppError::BusinessRule("catalogItemId is required".to_string()))?;
        if !self.catalog.exists_by_id(item_id).await? {
            return Err(AppError::BusinessRule(format!("Item {} does not exist", item_id)));
        }

        Ok(())
    }
}
