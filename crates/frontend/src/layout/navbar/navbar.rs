use super::state::{ordinal, NavState, NAV_ITEMS};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar(
    /// Short mark shown as `<brand/>`, usually the owner's initials
    #[prop(into)]
    brand: String,
) -> impl IntoView {
    let state = RwSignal::new(NavState::default());

    let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        state.update(|s| s.on_scroll(offset));
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <nav class=move || state.get().nav_class()>
            <div class="navbar__inner">
                <a href="#home" class="navbar__brand">
                    <span class="navbar__accent">"<"</span>
                    {brand}
                    <span class="navbar__accent">"/>"</span>
                </a>

                <ul class="navbar__links">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(index, item)| view! {
                            <li>
                                <a href=item.href class="navbar__link">
                                    <span class="navbar__ordinal">{ordinal(index)}</span>
                                    {item.label}
                                </a>
                            </li>
                        })
                        .collect_view()}
                </ul>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| state.update(NavState::toggle_menu)
                >
                    {move || if state.get().menu_open { icon("close") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || state.get().menu_open>
                <div class="navbar__mobile">
                    <ul class="navbar__mobile-links">
                        {NAV_ITEMS
                            .iter()
                            .enumerate()
                            .map(|(index, item)| view! {
                                <li>
                                    <a
                                        href=item.href
                                        class="navbar__mobile-link"
                                        on:click=move |_| state.update(NavState::close_menu)
                                    >
                                        <span class="navbar__ordinal">{ordinal(index)}</span>
                                        {item.label}
                                    </a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </nav>
    }
}
