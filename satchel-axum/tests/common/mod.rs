//! Shared fixtures for satchel-axum integration tests

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::{HeaderValue, StatusCode, header},
    middleware,
    routing::get,
};
use axum_test::{TestResponse, TestServer};
use satchel_axum::{SessionLayer, session_middleware};
use satchel_core::{MemoryStore, SessionHandle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct VisitResponse {
    pub visits: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecallResponse {
    pub name: Option<String>,
    pub visits: Option<i64>,
}

async fn visit(Extension(session): Extension<SessionHandle>) -> Json<VisitResponse> {
    let visits = session.get::<i64>("visits").await.unwrap_or(0) + 1;
    session.set("visits", visits).await;
    Json(VisitResponse { visits })
}

async fn remember(Extension(session): Extension<SessionHandle>) -> StatusCode {
    session.set("name", "ada").await;
    StatusCode::NO_CONTENT
}

async fn recall(Extension(session): Extension<SessionHandle>) -> Json<RecallResponse> {
    Json(RecallResponse {
        name: session.get::<String>("name").await.ok(),
        visits: session.get::<i64>("visits").await.ok(),
    })
}

async fn whoami(Extension(session): Extension<SessionHandle>) -> String {
    session.id().await.to_string()
}

/// Router with the session layer mounted, backed by the given store.
#[allow(dead_code)]
pub fn session_app(store: Arc<MemoryStore>) -> Router {
    let cookie_name = store.config().cookie_name.clone();
    Router::new()
        .route("/visit", get(visit))
        .route("/remember", get(remember))
        .route("/recall", get(recall))
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn(session_middleware))
        .layer(Extension(SessionLayer::new(store, cookie_name)))
}

/// Router using the same handlers but without the session layer mounted.
#[allow(dead_code)]
pub fn bare_app() -> Router {
    Router::new().route("/whoami", get(whoami))
}

#[allow(dead_code)]
pub fn test_server(store: Arc<MemoryStore>) -> TestServer {
    TestServer::new(session_app(store)).unwrap()
}

/// Session identifier carried by the response's Set-Cookie header.
#[allow(dead_code)]
pub fn session_cookie(response: &TestResponse, cookie_name: &str) -> String {
    let header = response.header(header::SET_COOKIE);
    let cookie = header.to_str().expect("session cookie should be ascii");
    cookie
        .strip_prefix(&format!("{cookie_name}="))
        .unwrap_or_else(|| panic!("unexpected session cookie: {cookie}"))
        .to_string()
}

/// Cookie header value replaying a previously issued identifier.
#[allow(dead_code)]
pub fn cookie_pair(cookie_name: &str, id: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{cookie_name}={id}")).unwrap()
}
