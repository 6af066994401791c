//! API integration tests
//!
//! Drive the full router against the in-process store.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use conecta_server::{api, repository::Repository, AppConfig, AppState};

fn app() -> Router {
    app_with(AppConfig::in_memory())
}

fn app_with(config: AppConfig) -> Router {
    api::router(AppState::new(config, Repository::in_memory()))
}

/// Helper to send a request and decode the JSON body (Null when empty)
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

async fn create_item(app: &Router, title: &str, author: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/acervo",
        Some(json!({
            "type": "Livro",
            "title": title,
            "author": author,
            "category": "Ficção"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_empty_listings() {
    let app = app();
    for uri in ["/api/usuarios", "/api/acervo", "/api/acervo?q=hobbit", "/api/reservas"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([]), "{}", uri);
    }
}

#[tokio::test]
async fn test_create_and_get_user() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/usuarios",
        Some(json!({"name": "Ana", "email": "ana@x.com", "password": "p"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("No user ID");
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["email"], "ana@x.com");
    assert_eq!(created["password"], "p");

    let (status, fetched) = send(&app, Method::GET, &format!("/api/usuarios/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_create_user_ignores_client_id() {
    let app = app();
    let (_, first) = send(&app, Method::POST, "/api/usuarios", Some(json!({"id": 500, "name": "A"}))).await;
    let (_, second) = send(&app, Method::POST, "/api/usuarios", Some(json!({"id": 500, "name": "B"}))).await;

    assert_ne!(first["id"], json!(500));
    assert_ne!(first["id"], second["id"]);

    let (_, listed) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_get_missing_user() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/usuarios/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/usuarios",
        Some(json!({"name": "Ana", "email": "ana@x.com", "password": "p"})),
    )
    .await;
    let id = created["id"].as_i64().expect("No user ID");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/usuarios/{}", id),
        Some(json!({"id": 999, "name": "Ana Silva", "email": "ana.silva@x.com", "password": "q"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": id, "name": "Ana Silva", "email": "ana.silva@x.com", "password": "q"})
    );

    let (_, fetched) = send(&app, Method::GET, &format!("/api/usuarios/{}", id), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_user_creates_nothing() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/usuarios/7",
        Some(json!({"name": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_delete_user_twice() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/usuarios", Some(json!({"name": "Ana"}))).await;
    let uri = format!("/api/usuarios/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_crud() {
    let app = app();
    let created = create_item(&app, "Duna", "Frank Herbert").await;
    let id = created["id"].as_i64().expect("No item ID");
    assert_eq!(created["type"], "Livro");
    assert_eq!(created["category"], "Ficção");

    let uri = format!("/api/acervo/{}", id);
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"type": "Revista", "title": "Duna", "author": "F. Herbert", "category": "Sci-fi"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": id, "type": "Revista", "title": "Duna", "author": "F. Herbert", "category": "Sci-fi"})
    );

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_missing_item() {
    let app = app();
    create_item(&app, "Duna", "Frank Herbert").await;

    let (status, _) = send(&app, Method::GET, "/api/acervo/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/acervo/99",
        Some(json!({"title": "Nada"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/acervo/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, Method::GET, "/api/acervo", None).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["title"], "Duna");
}

#[tokio::test]
async fn test_catalog_delete_removes_only_target() {
    let app = app();
    let hobbit = create_item(&app, "O Hobbit", "J.R.R. Tolkien").await;
    let duna = create_item(&app, "Duna", "Frank Herbert").await;

    let (status, _) = send(&app, Method::DELETE, &format!("/api/acervo/{}", hobbit["id"]), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, listed) = send(&app, Method::GET, "/api/acervo", None).await;
    assert_eq!(listed, json!([duna]));
}

#[tokio::test]
async fn test_catalog_search() {
    let app = app();
    let hobbit = create_item(&app, "O Hobbit", "J.R.R. Tolkien").await;
    let duna = create_item(&app, "Duna", "Frank Herbert").await;

    let (status, found) = send(&app, Method::GET, "/api/acervo?q=hobbit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, json!([hobbit.clone()]));

    let (_, found) = send(&app, Method::GET, "/api/acervo?q=HERBERT", None).await;
    assert_eq!(found, json!([duna.clone()]));

    let (_, all) = send(&app, Method::GET, "/api/acervo", None).await;
    assert_eq!(all, json!([hobbit.clone(), duna.clone()]));

    let (_, all) = send(&app, Method::GET, "/api/acervo?q=", None).await;
    assert_eq!(all, json!([hobbit.clone(), duna.clone()]));

    let (_, all) = send(&app, Method::GET, "/api/acervo?q=%20%20", None).await;
    assert_eq!(all, json!([hobbit, duna]));
}

#[tokio::test]
async fn test_catalog_search_unicode() {
    let app = app();
    let item = create_item(&app, "Memórias Póstumas de Brás Cubas", "Machado de Assis").await;

    // q=PÓSTUMAS
    let (_, found) = send(&app, Method::GET, "/api/acervo?q=P%C3%93STUMAS", None).await;
    assert_eq!(found, json!([item]));
}

#[tokio::test]
async fn test_portuguese_field_names_accepted() {
    let app = app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/acervo",
        Some(json!({"tipo": "Livro", "titulo": "Sapiens", "autor": "Yuval Noah Harari", "categoria": "História"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Sapiens");
    assert_eq!(created["type"], "Livro");
}

#[tokio::test]
async fn test_reservations() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/reservas",
        Some(json!({
            "userId": 3,
            "catalogItemId": 101,
            "reservationDate": "2025-10-01",
            "status": "Awaiting Return"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["reservationId"].is_i64());
    assert_eq!(created["userId"], 3);
    assert_eq!(created["catalogItemId"], 101);
    assert_eq!(created["reservationDate"], "2025-10-01");
    assert_eq!(created["status"], "Awaiting Return");

    let (status, listed) = send(&app, Method::GET, "/api/reservas", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_reservation_reference_validation() {
    let mut config = AppConfig::in_memory();
    config.reservations.validate_references = true;
    let app = app_with(config);

    let reservation = json!({
        "userId": 1,
        "catalogItemId": 1,
        "reservationDate": "2025-10-01",
        "status": "Awaiting Return"
    });

    let (status, body) = send(&app, Method::POST, "/api/reservas", Some(reservation.clone())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].is_string());

    send(&app, Method::POST, "/api/usuarios", Some(json!({"name": "Ana"}))).await;
    create_item(&app, "Duna", "Frank Herbert").await;

    let (status, _) = send(&app, Method::POST, "/api/reservas", Some(reservation)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listed) = send(&app, Method::GET, "/api/reservas", None).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/usuarios")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("Failed to build request");
    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    assert!(response.status().is_client_error());

    let (_, listed) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/usuarios")
        .header(header::ORIGIN, "http://localhost:5500")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to send request");
    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/acervo"]["get"].is_object());
    assert!(body["paths"]["/usuarios/{id}"]["delete"].is_object());
}
