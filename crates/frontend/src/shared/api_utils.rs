//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Empty by default, so requests go to the page's own origin
/// (`/api/portfolio` behind the dev proxy or the production host).
/// Set `PORTFOLIO_API_BASE` at build time to target another origin,
/// e.g. `PORTFOLIO_API_BASE=http://127.0.0.1:8000 trunk serve`.
pub fn api_base() -> &'static str {
    option_env!("PORTFOLIO_API_BASE")
        .map(|base| base.trim_end_matches('/'))
        .unwrap_or("")
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// let url = frontend::shared::api_utils::api_url("/api/portfolio");
/// assert!(url.ends_with("/api/portfolio"));
/// ```
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "/api/portfolio"), "/api/portfolio");
        assert_eq!(
            join_url("http://127.0.0.1:8000/", "/api/contact"),
            "http://127.0.0.1:8000/api/contact"
        );
    }
}
