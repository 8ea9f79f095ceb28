//! Black-box checks against a running card server.
//!
//! Tests in `tests/` are ignored by default because they need a live
//! instance. Start the server, then run:
//!
//! ```text
//! CARDS_BASE_URL=http://localhost:8080 cargo test -p cards_api_tests -- --ignored
//! ```

use reqwest::blocking::Client;

pub const BASE_URL_ENV: &str = "CARDS_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Resolves the server base URL, trimming any trailing slash.
pub fn base_url() -> String {
    resolve_base_url(std::env::var(BASE_URL_ENV).ok())
}

fn resolve_base_url(configured: Option<String>) -> String {
    configured
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// HTTP client bound to the resolved base URL.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn from_env() -> Self {
        Self {
            base_url: base_url(),
            client: Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_base_url, DEFAULT_BASE_URL};

    #[test]
    fn falls_back_to_localhost_when_unset_or_blank() {
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some("  ".to_string())), DEFAULT_BASE_URL);
    }

    #[test]
    fn override_drops_trailing_slash() {
        assert_eq!(
            resolve_base_url(Some("http://cards.test:9000/".to_string())),
            "http://cards.test:9000"
        );
    }
}
