pub mod page;
pub mod view_model;

use crate::shared::components::page_state::{ErrorScreen, LoadingScreen};
use leptos::prelude::*;
use page::{PageModel, PortfolioPage};
use view_model::{AppViewModel, PortfolioView};

#[component]
pub fn App() -> impl IntoView {
    let vm = AppViewModel::new();
    vm.load_on_mount();

    view! {
        {move || match vm.view() {
            PortfolioView::Loading => view! { <LoadingScreen /> }.into_any(),
            PortfolioView::Error(message) => view! { <ErrorScreen message=message /> }.into_any(),
            PortfolioView::Loaded(portfolio) => {
                let model = PageModel::from_portfolio(&portfolio);
                view! { <PortfolioPage model=model /> }.into_any()
            }
        }}
    }
}
