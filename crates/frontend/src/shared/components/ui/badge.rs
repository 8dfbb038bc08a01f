use leptos::prelude::*;

/// Technology tag chip
#[component]
pub fn Badge(
    /// Badge variant: "primary", "accent", "muted" or "neutral" (default)
    #[prop(optional)]
    variant: &'static str,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "primary" => "badge--primary",
        "accent" => "badge--accent",
        "muted" => "badge--muted",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {}", variant_class)>
            {children()}
        </span>
    }
}
