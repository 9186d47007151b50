//! Design-system primitives: card containers and buttons.
//!
//! DESIGN
//! ======
//! Styling lives in `style/main.css` under BEM-ish class names (`card`,
//! `card__header`, `btn--outline`). Every primitive takes an optional extra
//! `class` that is appended to its base class.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled primary button.
    #[default]
    Default,
    /// Transparent button with a border.
    Outline,
}

impl ButtonVariant {
    /// CSS modifier class for this variant.
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "btn--default",
            Self::Outline => "btn--outline",
        }
    }
}

/// Join a base class list with an optional caller-supplied class.
pub fn merge_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_owned(),
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! { <div class={merge_classes("card", class.as_deref())}>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! { <div class={merge_classes("card__header", class.as_deref())}>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! { <h3 class={merge_classes("card__title", class.as_deref())}>{children()}</h3> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! { <div class={merge_classes("card__content", class.as_deref())}>{children()}</div> }
}

/// A button that runs `on_click` once per activation.
#[component]
pub fn Button(
    on_click: Callback<()>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let base = format!("btn {}", variant.class());
    view! {
        <button type="button" class={merge_classes(&base, class.as_deref())} on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}
