//! Catalog items repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::catalog_item::CatalogItem,
};

const COLUMNS: &str = "id, item_type, title, author, category";

/// Data access for catalog items
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All items, ordered by id
    async fn find_all(&self) -> AppResult<Vec<CatalogItem>>;

    /// Items whose title or author contains `term`, ignoring case
    async fn search(&self, term: &str) -> AppResult<Vec<CatalogItem>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<CatalogItem>>;

    /// Insert when `item.id` is unset, otherwise overwrite the matching row.
    async fn save(&self, item: CatalogItem) -> AppResult<CatalogItem>;

    /// Returns true if a row was deleted.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: Pool<Postgres>,
}

impl PgCatalogRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn find_all(&self) -> AppResult<Vec<CatalogItem>> {
        let query = format!("SELECT {} FROM catalog_items ORDER BY id", COLUMNS);
        let items = sqlx::query_as::<_, CatalogItem>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn search(&self, term: &str) -> AppResult<Vec<CatalogItem>> {
        // strpos keeps '%' and '_' literal, lower() folds the whole UTF-8 text
        let query = format!(
            r#"
            SELECT {} FROM catalog_items
            WHERE strpos(lower(title), lower($1)) > 0
               OR strpos(lower(author), lower($1)) > 0
            ORDER BY id
            "#,
            COLUMNS
        );
        let items = sqlx::query_as::<_, CatalogItem>(&query)
            .bind(term)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<CatalogItem>> {
        let query = format!("SELECT {} FROM catalog_items WHERE id = $1", COLUMNS);
        let item = sqlx::query_as::<_, CatalogItem>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn save(&self, item: CatalogItem) -> AppResult<CatalogItem> {
        match item.id {
            None => {
                let query = format!(
                    r#"
                    INSERT INTO catalog_items (item_type, title, author, category)
                    VALUES ($1, $2, $3, $4)
                    RETURNING {}
                    "#,
                    COLUMNS
                );
                let created = sqlx::query_as::<_, CatalogItem>(&query)
                    .bind(&item.kind)
                    .bind(&item.title)
                    .bind(&item.author)
                    .bind(&item.category)
                    .fetch_one(&self.pool)
                    .await?;
                Ok(created)
            }
            Some(id) => {
                let query = format!(
                    r#"
                    UPDATE catalog_items
                    SET item_type = $2, title = $3, author = $4, category = $5
                    WHERE id = $1
                    RETURNING {}
                    "#,
                    COLUMNS
                );
                sqlx::query_as::<_, CatalogItem>(&query)
                    .bind(id)
                    .bind(&item.kind)
                    .bind(&item.title)
                    .bind(&item.author)
                    .bind(&item.category)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM catalog_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM catalog_items WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
