//! Catalog management service

use std::sync::Arc;

use crate::{error::AppResult, models::catalog_item::CatalogItem, repository::CatalogRepository};

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// List the catalog, filtered by title/author when `term` has text
    pub async fn list_all(&self, term: Option<&str>) -> AppResult<Vec<CatalogItem>> {
        match term.filter(|t| !t.trim().is_empty()) {
            Some(term) => {
                tracing::debug!("Catalog search: {:?}", term);
                self.repository.search(term).await
            }
            None => self.repository.find_all().await,
        }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<CatalogItem>> {
        self.repository.find_by_id(id).await
    }

    /// Insert or overwrite, depending on whether `item.id` is set
    pub async fn save(&self, item: CatalogItem) -> AppResult<CatalogItem> {
        self.repository.save(item).await
    }

    /// Create an item; any client-supplied id is discarded
    pub async fn create(&self, item: CatalogItem) -> AppResult<CatalogItem> {
        let created = self.save(CatalogItem { id: None, ..item }).await?;
        tracing::info!("Catalog item created: id={:?}", created.id);
        Ok(created)
    }

    /// Merge title, author, type and category into an existing item.
    /// Returns `None` when no item has this id.
    pub async fn update(&self, id: i64, changes: CatalogItem) -> AppResult<Option<CatalogItem>> {
        let Some(mut item) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        item.merge(changes);
        let updated = self.save(item).await?;
        tracing::info!("Catalog item updated: id={}", id);
        Ok(Some(updated))
    }

    /// Delete an item. Returns false when no item has this id.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }
        let deleted = self.repository.delete_by_id(id).await?;
        if deleted {
            tracing::info!("Catalog item deleted: id={}", id);
        }
        Ok(deleted)
    }
}
