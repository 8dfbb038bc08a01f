use crate::shared::icons::icon;
use leptos::prelude::*;

/// Full page placeholder while the portfolio request is pending
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="page-state">
            <div class="page-state__body">
                <span class="spinner">{icon("loader")}</span>
                <p class="page-state__text">"Loading portfolio..."</p>
            </div>
        </div>
    }
}

/// Static error panel. There is no retry action; reloading the page is the only way back.
#[component]
pub fn ErrorScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="page-state">
            <div class="page-state__body">
                <h1 class="page-state__title page-state__title--error">"Error"</h1>
                <p class="page-state__text">{message}</p>
            </div>
        </div>
    }
}
