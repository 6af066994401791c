//! Repository layer for database operations

pub mod catalog;
pub mod memory;
pub mod reservations;
pub mod users;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use catalog::{CatalogRepository, PgCatalogRepository};
pub use memory::MemoryRepository;
pub use reservations::{PgReservationsRepository, ReservationsRepository};
pub use users::{PgUsersRepository, UsersRepository};

use crate::error::AppResult;

/// Bundle of the per-entity repositories sharing one backing store
#[derive(Clone)]
pub struct Repository {
    pub users: Arc<dyn UsersRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub reservations: Arc<dyn ReservationsRepository>,
    pool: Option<Pool<Postgres>>,
}

impl Repository {
    /// Repositories backed by a PostgreSQL pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: Arc::new(PgUsersRepository::new(pool.clone())),
            catalog: Arc::new(PgCatalogRepository::new(pool.clone())),
            reservations: Arc::new(PgReservationsRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Repositories backed by a fresh, empty in-process store
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryRepository::<crate::models::User>::new()),
            catalog: Arc::new(MemoryRepository::<crate::models::CatalogItem>::new()),
            reservations: Arc::new(MemoryRepository::<crate::models::Reservation>::new()),
            pool: None,
        }
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}
