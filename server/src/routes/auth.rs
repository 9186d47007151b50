//! Auth routes — current user, logout, and the dev login bootstrap.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::services::session::SessionUser;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(COOKIE_NAME)
        .map(Cookie::value)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar).ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let user = app_state.sessions.get(&token).await.ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete the session if any, clear the cookie.
///
/// Always answers 204 so a repeated sign-out is harmless.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = session_token(&jar) {
        if state.sessions.delete(&token).await {
            tracing::info!("session ended");
        }
    }

    let jar = jar.add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /auth/dev-login` — start a session for `DEV_USER_EMAIL` and redirect to `/`.
///
/// Enabled only when `DEV_USER_EMAIL` is set.
pub async fn dev_login(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(email) = state.config.dev_user_email.clone() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let token = state.sessions.create(Some(email.clone())).await;
    tracing::info!(%email, "dev session created");

    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    (jar, Redirect::temporary("/")).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
