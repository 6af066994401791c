//! Catalog (acervo) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::catalog_item::{CatalogItem, CatalogQuery},
    AppState,
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Item with id {} not found", id))
}

/// List catalog items, optionally searching title and author
#[utoipa::path(
    get,
    path = "/acervo",
    tag = "catalog",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Matching catalog items", body = Vec<CatalogItem>)
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<Vec<CatalogItem>>> {
    let items = state.services.catalog.list_all(query.term()).await?;
    Ok(Json(items))
}

/// Get catalog item by ID
#[utoipa::path(
    get,
    path = "/acervo/{id}",
    tag = "catalog",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item details", body = CatalogItem),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CatalogItem>> {
    let item = state
        .services
        .catalog
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// Create a catalog item
#[utoipa::path(
    post,
    path = "/acervo",
    tag = "catalog",
    request_body = CatalogItem,
    responses(
        (status = 201, description = "Item created", body = CatalogItem)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(item): Json<CatalogItem>,
) -> AppResult<(StatusCode, Json<CatalogItem>)> {
    let created = state.services.catalog.create(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update title, author, type and category of a catalog item
#[utoipa::path(
    put,
    path = "/acervo/{id}",
    tag = "catalog",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = CatalogItem,
    responses(
        (status = 200, description = "Item updated", body = CatalogItem),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(item): Json<CatalogItem>,
) -> AppResult<Json<CatalogItem>> {
    let updated = state
        .services
        .catalog
        .update(id, item)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(updated))
}

/// Delete a catalog item
#[utoipa::path(
    delete,
    path = "/acervo/{id}",
    tag = "catalog",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    if state.services.catalog.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
