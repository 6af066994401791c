//! In-process store used for local runs and tests.
//!
//! Each table keeps rows in a `BTreeMap` keyed by identity, so listings come
//! back in id order just like the PostgreSQL adapter. Identities are handed
//! out from a per-table counter and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CatalogRepository, ReservationsRepository, UsersRepository};
use crate::{
    error::{AppError, AppResult},
    models::{CatalogItem, Reservation, User},
};

/// Row stored in a [`MemoryRepository`]
pub trait Record: Clone + Send + Sync {
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);
}

impl Record for User {
    const NAME: &'static str = "User";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for CatalogItem {
    const NAME: &'static str = "Item";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for Reservation {
    const NAME: &'static str = "Reservation";

    fn id(&self) -> Option<i64> {
        self.reservation_id
    }

    fn set_id(&mut self, id: i64) {
        self.reservation_id = Some(id);
    }
}

struct Table<T> {
    last_id: i64,
    rows: BTreeMap<i64, T>,
}

pub struct MemoryRepository<T> {
    table: RwLock<Table<T>>,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                last_id: 0,
                rows: BTreeMap::new(),
            }),
        }
    }

    async fn all(&self) -> Vec<T> {
        self.table.read().await.rows.values().cloned().collect()
    }

    async fn get(&self, id: i64) -> Option<T> {
        self.table.read().await.rows.get(&id).cloned()
    }

    async fn put(&self, mut row: T) -> AppResult<T> {
        let mut table = self.table.write().await;
        let id = match row.id() {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => {
                return Err(AppError::NotFound(format!("{} with id {} not found", T::NAME, id)));
            }
            None => {
                table.last_id += 1;
                table.last_id
            }
        };
        row.set_id(id);
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn remove(&self, id: i64) -> bool {
        self.table.write().await.rows.remove(&id).is_some()
    }

    async fn contains(&self, id: i64) -> bool {
        self.table.read().await.rows.contains_key(&id)
    }
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsersRepository for MemoryRepository<User> {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.all().await)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.get(id).await)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        self.put(user).await
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.remove(id).await)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.contains(id).await)
    }
}

#[async_trait]
impl CatalogRepository for MemoryRepository<CatalogItem> {
    async fn find_all(&self) -> AppResult<Vec<CatalogItem>> {
        Ok(self.all().await)
    }

    async fn search(&self, term: &str) -> AppResult<Vec<CatalogItem>> {
        let needle = term.to_lowercase();
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|item| item.matches(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<CatalogItem>> {
        Ok(self.get(id).await)
    }

    async fn save(&self, item: CatalogItem) -> AppResult<CatalogItem> {
        self.put(item).await
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.remove(id).await)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.contains(id).await)
    }
}

#[async_trait]
impl ReservationsRepository for MemoryRepository<Reservation> {
    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        Ok(self.all().await)
    }

    async fn save(&self, reservation: Reservation) -> AppResult<Reservation> {
        self.put(reservation).await
    }
}
