use axum::body::Body;
use axum::http::{Method, Request, header};
use tower::ServiceExt;

use super::*;
use crate::config::Config;

async fn send(app: Router, method: Method, uri: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(AppState::new(Config::default()));
    let resp = send(app, Method::GET, "/healthz", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn me_without_session_is_unauthorized() {
    let app = api_routes(AppState::new(Config::default()));
    let resp = send(app, Method::GET, "/api/auth/me", None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_session_returns_json_user() {
    let state = AppState::new(Config::default());
    let token = state.sessions.create(Some("alice@example.com".to_owned())).await;
    let app = api_routes(state);

    let resp = send(app, Method::GET, "/api/auth/me", Some(&format!("session_token={token}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["email"], "alice@example.com");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn logout_is_post_only() {
    let app = api_routes(AppState::new(Config::default()));
    let resp = send(app.clone(), Method::GET, "/api/auth/logout", None).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let resp = send(app, Method::POST, "/api/auth/logout", None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn sign_out_ends_session_for_me() {
    let state = AppState::new(Config::default());
    let token = state.sessions.create(Some("alice@example.com".to_owned())).await;
    let cookie = format!("session_token={token}");
    let app = api_routes(state);

    let resp = send(app.clone(), Method::POST, "/api/auth/logout", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(app, Method::GET, "/api/auth/me", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dev_login_route_disabled_by_default() {
    let app = api_routes(AppState::new(Config::default()));
    let resp = send(app, Method::GET, "/auth/dev-login", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
