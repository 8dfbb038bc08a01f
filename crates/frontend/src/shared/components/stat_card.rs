use leptos::prelude::*;

/// Small figure tile used in the About section
#[component]
pub fn StatCard(
    /// Primary value, already formatted
    #[prop(into)]
    value: String,
    /// Label displayed under the value
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}
