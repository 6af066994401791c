//! Catalog item model (books, magazines, devices...)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Entry of the library collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CatalogItem {
    /// Identity assigned by the store
    #[serde(default)]
    pub id: Option<i64>,
    /// Free-text classification, e.g. "Book" or "Magazine"
    #[serde(default, rename = "type", alias = "tipo")]
    #[sqlx(rename = "item_type")]
    pub kind: Option<String>,
    #[serde(default, alias = "titulo")]
    pub title: Option<String>,
    /// Author, publisher or manufacturer
    #[serde(default, alias = "autor")]
    pub author: Option<String>,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
}

impl CatalogItem {
    /// Overwrite title, author, type and category from `changes`; the id is kept.
    pub fn merge(&mut self, changes: CatalogItem) {
        self.title = changes.title;
        self.author = changes.author;
        self.kind = changes.kind;
        self.category = changes.category;
    }

    /// Case-insensitive substring match on title or author.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .map(|value| value.to_lowercase().contains(needle))
                .unwrap_or(false)
        };
        contains(&self.title) || contains(&self.author)
    }
}

/// Query parameters for listing the catalog
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// Search term matched against title and author
    pub q: Option<String>,
}

impl CatalogQuery {
    /// The search term, if it contains anything besides whitespace.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.trim().is_empty())
    }
}
