use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use super::*;

// =============================================================
// merge_classes
// =============================================================

#[test]
fn merge_classes_without_extra_returns_base() {
    assert_eq!(merge_classes("card", None), "card");
}

#[test]
fn merge_classes_appends_extra() {
    assert_eq!(merge_classes("card", Some("w-full")), "card w-full");
}

#[test]
fn merge_classes_ignores_blank_extra() {
    assert_eq!(merge_classes("card", Some("   ")), "card");
    assert_eq!(merge_classes("card", Some("")), "card");
}

// =============================================================
// ButtonVariant
// =============================================================

#[test]
fn button_variant_defaults_to_filled() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
}

#[test]
fn button_variant_classes_are_distinct() {
    assert_eq!(ButtonVariant::Default.class(), "btn--default");
    assert_eq!(ButtonVariant::Outline.class(), "btn--outline");
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn card_renders_children_inside_container() {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <Card class="card--narrow">
                <CardHeader>
                    <CardTitle>"Title"</CardTitle>
                </CardHeader>
                <CardContent>"Body"</CardContent>
            </Card>
        }
        .to_html()
    });
    assert!(html.contains("class=\"card card--narrow\""));
    assert!(html.contains("class=\"card__header\""));
    assert!(html.contains("class=\"card__title\""));
    assert!(html.contains("Title"));
    assert!(html.contains("class=\"card__content\""));
    assert!(html.contains("Body"));
}

#[test]
fn button_renders_variant_and_extra_class() {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <Button on_click=Callback::new(|()| {}) variant=ButtonVariant::Outline class="btn--block">
                "Go"
            </Button>
        }
        .to_html()
    });
    assert!(html.contains("<button"));
    assert!(html.contains("class=\"btn btn--outline btn--block\""));
    assert!(html.contains("Go"));
}
