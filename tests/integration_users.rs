mod common;

use axum::http::StatusCode;
use common::{send, setup_test_app, token_for};
use serde_json::json;

#[tokio::test]
async fn test_profile_returns_identity() {
    let app = setup_test_app();
    let token = token_for(Some("manager"));

    let (status, body) = send(&app.router, "GET", "/api/v1/users/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["uid"], "uid-manager");
    assert_eq!(body["data"]["role"], "manager");
    assert_eq!(body["data"]["email"], "coach@club.test");
}

#[tokio::test]
async fn test_profile_defaults_role_to_user() {
    let app = setup_test_app();
    let token = token_for(None);

    let (status, body) = send(&app.router, "GET", "/api/v1/users/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "user");
}

#[tokio::test]
async fn test_profile_requires_token() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "GET", "/api/v1/users/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Missing authorization header");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_admin_sets_role() {
    let app = setup_test_app();
    let token = token_for(Some("admin"));

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/v1/admin/set-custom-claims",
        Some(&token),
        Some(json!({"uid": "uid-42", "role": "manager"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["uid"], "uid-42");
    assert_eq!(body["data"]["role"], "manager");
    assert!(body["data"]["updatedAt"].is_string());

    let (status, body) = send(
        &app.router,
        "GET",
        "/api/v1/admin/users/uid-42",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "manager");
}

#[tokio::test]
async fn test_manager_cannot_set_role() {
    let app = setup_test_app();
    let token = token_for(Some("manager"));

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/v1/admin/set-custom-claims",
        Some(&token),
        Some(json!({"uid": "uid-42", "role": "admin"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied. Required roles: admin");
}

#[tokio::test]
async fn test_set_role_rejects_unknown_role() {
    let app = setup_test_app();
    let token = token_for(Some("admin"));

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/v1/admin/set-custom-claims",
        Some(&token),
        Some(json!({"uid": "uid-42", "role": "owner"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Role must be one of admin, manager, user");
}

#[tokio::test]
async fn test_role_lookup_missing_user() {
    let app = setup_test_app();
    let token = token_for(Some("admin"));

    let (status, body) = send(
        &app.router,
        "GET",
        "/api/v1/admin/users/nobody",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User with ID nobody not found");
}
