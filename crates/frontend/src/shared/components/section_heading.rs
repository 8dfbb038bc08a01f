use leptos::prelude::*;

/// Numbered section title, e.g. "01. About Me"
#[component]
pub fn SectionHeading(
    /// Two digit ordinal shown before the title
    #[prop(into)]
    number: String,
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <h2 class="section-heading">
            <span class="section-heading__number">{format!("{}.", number)}</span>
            {title}
            <div class="section-heading__rule"></div>
        </h2>
    }
}
