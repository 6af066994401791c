//! Data models for Conecta

pub mod catalog_item;
pub mod reservation;
pub mod user;

pub use catalog_item::{CatalogItem, CatalogQuery};
pub use reservation::Reservation;
pub use user::User;
