//! HTTP client for the two backend endpoints.
//!
//! One round trip per call: no retry, timeout or caching.

use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::domain::a007_contact_message::aggregate::ContactMessage;
use contracts::Portfolio;
use gloo_net::http::Request;
use thiserror::Error;

pub const PORTFOLIO_PATH: &str = "/api/portfolio";
pub const CONTACT_PATH: &str = "/api/contact";

/// Failure of a backend call. The detail is for logs only, the UI shows
/// fixed messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("failed to serialize request: {0}")]
    Encode(String),
}

/// Backend seam. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait PortfolioApi {
    /// `GET /api/portfolio`; any non-2xx status is an error.
    async fn fetch_portfolio(&self) -> Result<Portfolio, ApiError>;

    /// `POST /api/contact` with a JSON body; the response body is ignored.
    async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPortfolioApi;

#[async_trait(?Send)]
impl PortfolioApi for HttpPortfolioApi {
    async fn fetch_portfolio(&self) -> Result<Portfolio, ApiError> {
        let response = Request::get(&api_url(PORTFOLIO_PATH))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<Portfolio>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        let response = Request::post(&api_url(CONTACT_PATH))
            .json(message)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(())
    }
}
