//! API handlers for the Conecta REST endpoints

pub mod catalog;
pub mod health;
pub mod openapi;
pub mod reservations;
pub mod users;

use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Cross-origin policy for everything under `/api`
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route("/acervo", get(catalog::list_items).post(catalog::create_item))
        .route(
            "/acervo/:id",
            get(catalog::get_item)
                .put(catalog::update_item)
                .delete(catalog::delete_item),
        )
        // Users
        .route("/usuarios", get(users::list_users).post(users::create_user))
        .route(
            "/usuarios/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Reservations
        .route(
            "/reservas",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .layer(cors_layer())
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
}
