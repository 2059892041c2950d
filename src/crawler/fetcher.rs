//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the shared HTTP client with a fixed per-request timeout
//! - Issuing GET requests
//! - Classifying outcomes into the categories the workers act on

use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Classified result of fetching one URL
#[derive(Debug)]
pub enum FetchOutcome {
    /// Response received with a non-error status
    Success {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Response received with a status in the 400-599 range (dead link)
    HttpError {
        /// The HTTP status code
        status: u16,
    },

    /// Connection-level failure: refused, DNS, TLS, reset (dead link)
    NetworkError {
        /// Error description
        error: String,
    },

    /// The request timed out within the configured budget
    ///
    /// Timeouts are neither dead links nor errors: a slow server cannot be
    /// distinguished from a broken one within the budget, so the page is
    /// skipped to avoid false positives. Flagged as a policy choice, not a
    /// correctness property.
    TimedOut,

    /// Response arrived but the body could not be read or decoded
    ///
    /// The page answered, so it is not dead; it just cannot be scanned for
    /// further links.
    UnreadableBody {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared by all workers
///
/// Redirects follow reqwest's default policy (up to 10 hops); a redirect
/// chain that ends in an error status is still classified as a dead link at
/// the original URL.
///
/// # Arguments
///
/// * `timeout_secs` - Total per-request timeout in seconds
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("linkrot/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// # Classification
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | Status 400-599 | `HttpError` (dead link) |
/// | Other status, body read | `Success` |
/// | Other status, body unreadable | `UnreadableBody` |
/// | Request timeout | `TimedOut` (silently skipped) |
/// | Connection refused, DNS, TLS, ... | `NetworkError` (dead link) |
pub async fn fetch_url(client: &Client, url: &Url) -> FetchOutcome {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            if e.is_timeout() {
                return FetchOutcome::TimedOut;
            }
            return FetchOutcome::NetworkError {
                error: e.to_string(),
            };
        }
    };

    let status = response.status().as_u16();
    if (400..=599).contains(&status) {
        return FetchOutcome::HttpError { status };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Success { status, body },
        Err(e) => {
            if e.is_timeout() {
                FetchOutcome::TimedOut
            } else {
                FetchOutcome::UnreadableBody {
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(5).is_ok());
    }

    #[tokio::test]
    async fn test_success_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client = build_http_client(5).unwrap();
        let outcome = fetch_url(&client, &url(&format!("{}/page", server.uri()))).await;
        match outcome {
            FetchOutcome::Success { status, body } => {
                assert_eq!(status, 200);
                assert_eq!(body, "<html></html>");
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_not_found_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(5).unwrap();
        let outcome = fetch_url(&client, &url(&format!("{}/missing", server.uri()))).await;
        assert!(matches!(outcome, FetchOutcome::HttpError { status: 404 }));
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = build_http_client(5).unwrap();
        let outcome = fetch_url(&client, &url(&format!("{}/broken", server.uri()))).await;
        assert!(matches!(outcome, FetchOutcome::HttpError { status: 503 }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Port 1 is essentially never listening on loopback.
        let client = build_http_client(5).unwrap();
        let outcome = fetch_url(&client, &url("http://127.0.0.1:1/")).await;
        assert!(matches!(outcome, FetchOutcome::NetworkError { .. }));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = build_http_client(1).unwrap();
        let outcome = fetch_url(&client, &url(&format!("{}/slow", server.uri()))).await;
        assert!(matches!(outcome, FetchOutcome::TimedOut));
    }
}
