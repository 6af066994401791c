//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::user::User,
    AppState,
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User with id {} not found", id))
}

/// List all users
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list_all().await?;
    Ok(Json(users))
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<User>> {
    let user = state
        .services
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> AppResult<(StatusCode, Json<User>)> {
    let created = state.services.users.create(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace name, email and password of an existing user
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(user): Json<User>,
) -> AppResult<Json<User>> {
    let updated = state
        .services
        .users
        .update(id, user)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(updated))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    if state.services.users.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
