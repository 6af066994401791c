//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{catalog, health, reservations, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Conecta API",
        version = "0.1.0",
        description = "Library management REST API: users, catalog and reservations"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        catalog::list_items,
        catalog::get_item,
        catalog::create_item,
        catalog::update_item,
        catalog::delete_item,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Reservations
        reservations::list_reservations,
        reservations::create_reservation,
    ),
    components(
        schemas(
            crate::models::catalog_item::CatalogItem,
            crate::models::user::User,
            crate::models::reservation::Reservation,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Catalog item management"),
        (name = "users", description = "User management"),
        (name = "reservations", description = "Reservation management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
