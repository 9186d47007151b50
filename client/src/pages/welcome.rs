//! Welcome page showing the signed-in user's email and a sign-out button.
//!
//! SYSTEM CONTEXT
//! ==============
//! `WelcomePage` is the adapter: it reads the `Auth` context and builds a
//! `WelcomeViewModel`. `WelcomeCard` renders that view-model and holds no
//! state of its own, so the same input always yields the same markup.
//!
//! An absent user renders an empty email line. Guarding the route against
//! signed-out visitors is left to whatever hosts this page.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use leptos::prelude::*;

use crate::components::ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::state::auth::{Auth, use_auth};

/// Immutable inputs for [`WelcomeCard`].
#[derive(Clone)]
pub struct WelcomeViewModel {
    pub email: Option<String>,
    pub on_sign_out: Callback<()>,
}

impl WelcomeViewModel {
    pub fn new(email: Option<String>, on_sign_out: Callback<()>) -> Self {
        Self { email, on_sign_out }
    }

    pub fn from_auth(auth: &Auth) -> Self {
        Self::new(auth.email(), auth.sign_out)
    }

    /// Text for the email line; empty when no user is signed in.
    pub fn email_text(&self) -> String {
        self.email.clone().unwrap_or_default()
    }

    /// Forward one activation to the sign-out action. Fire-and-forget.
    pub fn sign_out(&self) {
        self.on_sign_out.run(());
    }
}

/// Welcome card on a full-viewport background.
#[component]
pub fn WelcomeCard(view_model: WelcomeViewModel) -> impl IntoView {
    let email = view_model.email_text();
    let on_click = Callback::new(move |()| view_model.sign_out());

    view! {
        <div class="welcome-page">
            <Card class="welcome-card">
                <CardHeader>
                    <CardTitle class="text-center">"Welcome!"</CardTitle>
                </CardHeader>
                <CardContent class="welcome-card__content">
                    <div class="text-center">
                        <p class="welcome-card__label">"Signed in as:"</p>
                        <p class="welcome-card__email">{email}</p>
                    </div>
                    <Button on_click=on_click variant=ButtonVariant::Outline class="btn--block">
                        "Sign Out"
                    </Button>
                </CardContent>
            </Card>
        </div>
    }
}

/// Route component for `/`.
#[component]
pub fn WelcomePage() -> impl IntoView {
    let auth = use_auth();

    move || {
        let view_model = WelcomeViewModel::from_auth(&auth);
        view! { <WelcomeCard view_model=view_model/> }
    }
}
