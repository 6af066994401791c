//! Reservations repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::reservation::Reservation,
};

/// Data access for reservations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationsRepository: Send + Sync {
    /// All reservations, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;

    /// Insert when `reservation_id` is unset, otherwise overwrite the matching row.
    async fn save(&self, reservation: Reservation) -> AppResult<Reservation>;
}

#[derive(Clone)]
pub struct PgReservationsRepository {
    pool: Pool<Postgres>,
}

impl PgReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationsRepository for PgReservationsRepository {
    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT reservation_id, user_id, catalog_item_id, reservation_date, status
            FROM reservations
            ORDER BY reservation_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn save(&self, reservation: Reservation) -> AppResult<Reservation> {
        match reservation.reservation_id {
            None => {
                let created = sqlx::query_as::<_, Reservation>(
                    r#"
                    INSERT INTO reservations (user_id, catalog_item_id, reservation_date, status)
                    VALUES ($1, $2, $3, $4)
                    RETURNING reservation_id, user_id, catalog_item_id, reservation_date, status
                    "#,
                )
                .bind(reservation.user_id)
                .bind(reservation.catalog_item_id)
                .bind(reservation.reservation_date)
                .bind(&reservation.status)
                .fetch_one(&self.pool)
                .await?;
                Ok(created)
            }
            Some(id) => sqlx::query_as::<_, Reservation>(
                r#"
                UPDATE reservations
                SET user_id = $2, catalog_item_id = $3, reservation_date = $4, status = $5
                WHERE reservation_id = $1
                RETURNING reservation_id, user_id, catalog_item_id, reservation_date, status
                "#,
            )
            .bind(id)
            .bind(reservation.user_id)
            .bind(reservation.catalog_item_id)
            .bind(reservation.reservation_date)
            .bind(&reservation.status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation with id {} not found", id))),
        }
    }
}
