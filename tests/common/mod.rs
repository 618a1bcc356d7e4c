use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use matchday::router::init_router;
use matchday::state::AppState;
use matchday_auth::JwtIdentityProvider;
use matchday_config::{CorsConfig, JwtConfig};
use matchday_db::MemoryDocumentStore;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub store: MemoryDocumentStore,
}

/// Application state over `store`, verifying tokens signed with [`TEST_SECRET`].
pub fn test_state(store: MemoryDocumentStore) -> AppState {
    let identity = JwtIdentityProvider::new(&JwtConfig {
        secret: TEST_SECRET.to_string(),
        issuer: None,
        audience: None,
        leeway_secs: 0,
    });

    AppState::new(
        Arc::new(store),
        Arc::new(identity),
        CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    )
}

#[allow(dead_code)]
pub fn setup_test_app() -> TestApp {
    let store = MemoryDocumentStore::new();
    TestApp {
        router: init_router(test_state(store.clone())),
        store,
    }
}

/// Mints a token the way the external identity provider would.
pub fn token_for(role: Option<&str>) -> String {
    let mut claims = json!({
        "sub": format!("uid-{}", role.unwrap_or("none")),
        "email": "coach@club.test",
        "exp": Utc::now().timestamp() + 3600,
        "iat": Utc::now().timestamp(),
    });
    if let Some(role) = role {
        claims["role"] = json!(role);
    }
    sign(&claims)
}

#[allow(dead_code)]
pub fn expired_token(role: &str) -> String {
    sign(&json!({
        "sub": "uid-expired",
        "role": role,
        "exp": Utc::now().timestamp() - 600,
    }))
}

fn sign(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Sends a request through the router and returns the status with the
/// decoded JSON body (`Value::Null` for an empty or non-JSON body).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
