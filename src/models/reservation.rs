//! Reservation model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reservation of a catalog item by a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Identity assigned by the store
    #[serde(default, alias = "idReserva")]
    pub reservation_id: Option<i64>,
    #[serde(default, alias = "idUsuario")]
    pub user_id: Option<i64>,
    #[serde(default, alias = "idItemAcervo")]
    pub catalog_item_id: Option<i64>,
    #[serde(default, alias = "dataReserva")]
    pub reservation_date: Option<NaiveDate>,
    /// Free-text state, e.g. "Awaiting Return"
    #[serde(default)]
    pub status: Option<String>,
}
