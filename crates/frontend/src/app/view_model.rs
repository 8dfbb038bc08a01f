use crate::shared::api::{ApiError, HttpPortfolioApi, PortfolioApi};
use contracts::Portfolio;
use leptos::prelude::*;
use std::sync::Arc;

/// Shown instead of the page when the portfolio request fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load portfolio data. Please try again later.";

/// Tri-state view of the single portfolio request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PortfolioView {
    #[default]
    Loading,
    Error(String),
    Loaded(Arc<Portfolio>),
}

impl PortfolioView {
    /// Failure detail goes to the log, the view only keeps the fixed message.
    pub fn from_result(result: Result<Portfolio, ApiError>) -> Self {
        match result {
            Ok(portfolio) => PortfolioView::Loaded(Arc::new(portfolio)),
            Err(e) => {
                log::error!("Failed to fetch portfolio: {}", e);
                PortfolioView::Error(LOAD_ERROR_MESSAGE.to_string())
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, PortfolioView::Loading)
    }
}

/// Lifecycle of the portfolio request for one mount of the app.
///
/// `start` hands out the single fetch; `resolve` moves `Loading` to
/// `Loaded` or `Error` and is a no-op once either is reached.
#[derive(Debug, Clone, Default)]
pub struct PortfolioLoader {
    view: PortfolioView,
    started: bool,
}

impl PortfolioLoader {
    pub fn view(&self) -> &PortfolioView {
        &self.view
    }

    /// `true` the first time only.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    /// Returns whether the result was applied.
    pub fn resolve(&mut self, result: Result<Portfolio, ApiError>) -> bool {
        if self.view.is_terminal() {
            return false;
        }
        self.view = PortfolioView::from_result(result);
        true
    }
}

/// ViewModel for the application root
#[derive(Clone, Copy)]
pub struct AppViewModel {
    pub loader: RwSignal<PortfolioLoader>,
}

impl AppViewModel {
    pub fn new() -> Self {
        Self {
            loader: RwSignal::new(PortfolioLoader::default()),
        }
    }

    pub fn view(&self) -> PortfolioView {
        self.loader.with(|l| l.view().clone())
    }

    /// Issue the portfolio request in the background. Later calls do nothing.
    pub fn load_on_mount(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            vm.load_with(&HttpPortfolioApi).await;
        });
    }

    /// Run the single fetch through `api` and store the outcome.
    /// Returns without calling `api` once a fetch has been started.
    pub async fn load_with(&self, api: &impl PortfolioApi) {
        let loader = self.loader;
        if !loader.try_update(PortfolioLoader::start).unwrap_or(false) {
            return;
        }
        log::debug!("Fetching portfolio");

        let result = api.fetch_portfolio().await;
        loader.update(|l| {
            if !l.resolve(result) {
                log::debug!("Portfolio already resolved, late result dropped");
            }
        });
    }
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a007_contact_message::aggregate::ContactMessage;
    use std::cell::Cell;

    struct StubApi {
        outcome: Result<Portfolio, ApiError>,
        calls: Cell<usize>,
    }

    impl StubApi {
        fn new(outcome: Result<Portfolio, ApiError>) -> Self {
            Self { outcome, calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl PortfolioApi for StubApi {
        async fn fetch_portfolio(&self) -> Result<Portfolio, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }

        async fn submit_contact(&self, _message: &ContactMessage) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn current_view(vm: &AppViewModel) -> PortfolioView {
        vm.loader.with_untracked(|l| l.view().clone())
    }

    #[test]
    fn test_starts_loading() {
        let loader = PortfolioLoader::default();
        assert_eq!(loader.view(), &PortfolioView::Loading);
        assert!(!loader.view().is_terminal());
    }

    #[tokio::test]
    async fn test_success_reaches_loaded() {
        let owner = Owner::new();
        let vm = owner.with(AppViewModel::new);
        let api = StubApi::new(Ok(Portfolio::default()));

        vm.load_with(&api).await;

        assert_eq!(current_view(&vm), PortfolioView::Loaded(Arc::new(Portfolio::default())));
        assert_eq!(api.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failure_reaches_error_with_fixed_message() {
        let owner = Owner::new();
        let vm = owner.with(AppViewModel::new);
        let api = StubApi::new(Err(ApiError::Status(503)));

        vm.load_with(&api).await;

        assert_eq!(current_view(&vm), PortfolioView::Error(LOAD_ERROR_MESSAGE.to_string()));
        assert_eq!(vm.view(), current_view(&vm));
    }

    #[tokio::test]
    async fn test_only_one_fetch_per_mount() {
        let owner = Owner::new();
        let vm = owner.with(AppViewModel::new);
        let api = StubApi::new(Ok(Portfolio::default()));

        vm.load_with(&api).await;
        vm.load_with(&api).await;

        assert_eq!(api.calls.get(), 1);
        assert!(current_view(&vm).is_terminal());
    }

    #[tokio::test]
    async fn test_failed_load_is_not_retried() {
        let owner = Owner::new();
        let vm = owner.with(AppViewModel::new);
        let failing = StubApi::new(Err(ApiError::Transport("offline".to_string())));
        let healthy = StubApi::new(Ok(Portfolio::default()));

        vm.load_with(&failing).await;
        vm.load_with(&healthy).await;

        assert_eq!(healthy.calls.get(), 0);
        assert_eq!(current_view(&vm), PortfolioView::Error(LOAD_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_terminal_state_is_never_replaced() {
        let mut loader = PortfolioLoader::default();
        assert!(loader.start());
        assert!(!loader.start());

        assert!(loader.resolve(Err(ApiError::Transport("offline".to_string()))));
        assert!(!loader.resolve(Ok(Portfolio::default())));
        assert!(matches!(loader.view(), PortfolioView::Error(_)));

        let mut loader = PortfolioLoader::default();
        assert!(loader.resolve(Ok(Portfolio::default())));
        assert!(!loader.resolve(Err(ApiError::Status(500))));
        assert!(matches!(loader.view(), PortfolioView::Loaded(_)));
    }
}
