use leptos::prelude::*;

/// Button component with variants (primary, secondary) and sizes (md, lg)
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "secondary"
    #[prop(optional)]
    variant: &'static str,
    /// Button size: "md" (default) or "lg"
    #[prop(optional)]
    size: &'static str,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    /// Button type attribute, "button" when not set
    #[prop(optional)]
    button_type: &'static str,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "secondary" => "button--secondary",
        _ => "button--primary",
    };
    let size_class = if size == "lg" { "button--large" } else { "" };
    let btn_type = if button_type.is_empty() { "button" } else { button_type };

    view! {
        <button
            type=btn_type
            class=format!("button {} {} {}", variant_class, size_class, class)
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
