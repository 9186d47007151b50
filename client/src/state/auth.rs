//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read the signed-in user and the sign-out action through the `Auth`
//! handle provided here. Pages never talk to the auth endpoints directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication state tracking the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// Email of the signed-in user, if any.
    pub fn email(&self) -> Option<String> {
        self.user.as_ref().and_then(|user| user.email.clone())
    }
}

/// Context handle exposing the current auth state and the sign-out action.
#[derive(Clone, Copy)]
pub struct Auth {
    pub state: RwSignal<AuthState>,
    pub sign_out: Callback<()>,
}

impl Auth {
    pub fn new(state: RwSignal<AuthState>, sign_out: Callback<()>) -> Self {
        Self { state, sign_out }
    }

    /// Reactive read of the signed-in user's email.
    pub fn email(&self) -> Option<String> {
        self.state.with(AuthState::email)
    }
}

/// Create the auth context for the component tree.
///
/// In the browser this starts the `/api/auth/me` lookup and wires sign-out to
/// `POST /api/auth/logout`. The local user is cleared once the request
/// settles, whether or not it succeeded.
pub fn provide_auth() -> Auth {
    let state = RwSignal::new(AuthState::default());

    let sign_out = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::sign_out().await {
                log::warn!("sign out failed: {e}");
            }
            state.update(|s| s.user = None);
        });
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        state.set(AuthState { user });
    });

    let auth = Auth::new(state, sign_out);
    provide_context(auth);
    auth
}

/// Read the auth handle provided by [`provide_auth`].
pub fn use_auth() -> Auth {
    expect_context::<Auth>()
}
