//! End-to-end HTTP tests for the users API.
//!
//! Each test builds the full router (CORS and trace layers included) around
//! a freshly seeded store and drives it with `tower::ServiceExt::oneshot`;
//! no sockets are opened. The router is cloned between requests within a
//! test, so state is shared through the store lock exactly as it is in
//! production.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;
use users_server::{AppState, ServerConfig, app};

fn test_app() -> Router {
    app(AppState::new(ServerConfig::default()))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn root_reports_api_metadata() {
    let (status, body) = send(test_app(), Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "1.0");
    assert_eq!(body["description"], "Users API");
    assert!(body["documentation"].is_string());
}

#[tokio::test]
async fn list_returns_seeded_users() {
    let (status, body) = send(test_app(), Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Alice", "email": "alice@example.com"},
            {"id": 2, "name": "Bob", "email": "bob@example.com"},
        ])
    );
}

#[tokio::test]
async fn get_returns_user_by_id() {
    let (status, body) = send(test_app(), Method::GET, "/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Alice", "email": "alice@example.com"})
    );
}

#[tokio::test]
async fn get_missing_user_returns_404() {
    let (status, body) = send(test_app(), Method::GET, "/users/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "User not found"}));
}

#[tokio::test]
async fn get_non_integer_id_returns_422() {
    let (status, _) = send(test_app(), Method::GET, "/users/abc", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_assigns_the_next_id() {
    let app = test_app();

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/users",
        Some(json!({"name": "Charlie", "email": "charlie@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": 3, "name": "Charlie", "email": "charlie@example.com"})
    );

    // The new record is visible to subsequent requests.
    let (status, body) = send(app, Method::GET, "/users/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Charlie");
}

#[tokio::test]
async fn create_with_missing_email_returns_422() {
    let (status, _) = send(
        test_app(),
        Method::POST,
        "/users",
        Some(json!({"name": "Dana"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_with_empty_name_returns_422() {
    let (status, body) = send(
        test_app(),
        Method::POST,
        "/users",
        Some(json!({"name": "", "email": "nobody@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn put_replaces_both_fields() {
    let app = test_app();

    let (status, body) = send(
        app.clone(),
        Method::PUT,
        "/users/1",
        Some(json!({"name": "Alice Smith", "email": "alice.smith@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Alice Smith", "email": "alice.smith@example.com"})
    );

    let (_, body) = send(app, Method::GET, "/users/1", None).await;
    assert_eq!(body["name"], "Alice Smith");
    assert_eq!(body["email"], "alice.smith@example.com");
}

#[tokio::test]
async fn put_missing_user_returns_404() {
    let (status, body) = send(
        test_app(),
        Method::PUT,
        "/users/999",
        Some(json!({"name": "Nobody", "email": "nobody@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "User not found"}));
}

#[tokio::test]
async fn patch_updates_only_present_fields() {
    let app = test_app();

    let (status, body) = send(
        app.clone(),
        Method::PATCH,
        "/users/2",
        Some(json!({"email": "bob.new@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 2, "name": "Bob", "email": "bob.new@example.com"})
    );

    let (_, body) = send(app, Method::GET, "/users/2", None).await;
    assert_eq!(body["name"], "Bob");
    assert_eq!(body["email"], "bob.new@example.com");
}

#[tokio::test]
async fn patch_missing_user_returns_404() {
    let (status, body) = send(
        test_app(),
        Method::PATCH,
        "/users/999",
        Some(json!({"name": "Nobody"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "User not found"}));
}

#[tokio::test]
async fn delete_confirms_and_removes_the_user() {
    let app = test_app();

    let (status, body) = send(app.clone(), Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User Alice deleted successfully"}));

    // Subsequent lookups fail.
    let (status, body) = send(app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "User not found"}));
}

#[tokio::test]
async fn delete_missing_user_returns_404() {
    let (status, body) = send(test_app(), Method::DELETE, "/users/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "User not found"}));
}

#[tokio::test]
async fn deleted_ids_are_never_reassigned() {
    let app = test_app();

    let (status, _) = send(app.clone(), Method::DELETE, "/users/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({"name": "Charlie", "email": "charlie@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn preflight_allows_any_origin_with_credentials() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/users")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    // The wildcard origin is mirrored back because credentials are allowed.
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://example.com")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}
