//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since the session cookie is only attached by
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the current session by calling `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(logout_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
