mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use common::{expired_token, send, test_state, token_for};
use matchday::middleware::auth::{AuthUser, INVALID_TOKEN, MISSING_HEADER};
use matchday::middleware::role::{ADMIN, ANY, STAFF, check_any_role, protect};
use matchday_auth::{Identity, Role};
use matchday_db::MemoryDocumentStore;

fn create_test_auth_user(role: Role) -> AuthUser {
    AuthUser(Identity {
        subject: "uid-test".to_string(),
        role,
        email: Some("test@example.com".to_string()),
    })
}

fn guarded_app(allowed: &'static [Role]) -> Router {
    let state = test_state(MemoryDocumentStore::new());
    let router = Router::new().route("/guarded", get(|| async { "ok" }));
    protect(router, &state, allowed).with_state(state)
}

async fn status_for(app: &Router, role: Option<&str>) -> StatusCode {
    let token = token_for(role);
    send(app, "GET", "/guarded", Some(&token), None).await.0
}

#[test]
fn test_check_any_role_single_match() {
    let auth_user = create_test_auth_user(Role::Admin);
    assert!(check_any_role(&auth_user, ADMIN).is_ok());
}

#[test]
fn test_check_any_role_multiple_match() {
    assert!(check_any_role(&create_test_auth_user(Role::Admin), STAFF).is_ok());
    assert!(check_any_role(&create_test_auth_user(Role::Manager), STAFF).is_ok());
    assert!(check_any_role(&create_test_auth_user(Role::User), ANY).is_ok());
}

#[test]
fn test_check_any_role_no_match() {
    let auth_user = create_test_auth_user(Role::User);
    assert!(check_any_role(&auth_user, STAFF).is_err());
}

#[test]
fn test_check_any_role_empty_list() {
    let auth_user = create_test_auth_user(Role::Admin);
    assert!(check_any_role(&auth_user, &[]).is_err());
}

#[tokio::test]
async fn test_protect_staff() {
    let app = guarded_app(STAFF);

    assert_eq!(status_for(&app, Some("admin")).await, StatusCode::OK);
    assert_eq!(status_for(&app, Some("manager")).await, StatusCode::OK);
    assert_eq!(status_for(&app, Some("user")).await, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_protect_admin() {
    let app = guarded_app(ADMIN);

    assert_eq!(status_for(&app, Some("admin")).await, StatusCode::OK);
    assert_eq!(status_for(&app, Some("manager")).await, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_protect_any_accepts_token_without_role() {
    let app = guarded_app(ANY);
    assert_eq!(status_for(&app, None).await, StatusCode::OK);
}

#[tokio::test]
async fn test_protect_forbidden_message() {
    let app = guarded_app(STAFF);
    let token = token_for(Some("user"));

    let (_, body) = send(&app, "GET", "/guarded", Some(&token), None).await;
    assert_eq!(body["message"], "Access denied. Required roles: admin, manager");
}

#[tokio::test]
async fn test_protect_authenticates_before_role_check() {
    let app = guarded_app(ADMIN);

    let (status, body) = send(&app, "GET", "/guarded", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], MISSING_HEADER);

    let token = expired_token("admin");
    let (status, body) = send(&app, "GET", "/guarded", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], INVALID_TOKEN);
}
