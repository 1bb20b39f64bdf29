// src/checker/http.rs
// =============================================================================
// This module checks whether the links found in our content are alive.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Retries with GET when a server refuses HEAD (405)
// - Detects various failure modes (404, timeout, SSL errors, etc.)
// - Runs checks concurrently, limited by the configured concurrency
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Enums: To represent different link states
// - Streams: For processing many items concurrently
// =============================================================================

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

// A link to check plus the topics that contain it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub url: String,
    pub found_in: Vec<String>,
}

// Represents the status of a link after checking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "target", rename_all = "snake_case")]
pub enum LinkStatus {
    /// Link is working (2xx)
    Ok,
    /// Link redirects to another URL (3xx), holds the Location header
    Redirect(String),
    /// Link is broken (404, 410)
    Broken,
    /// Request timed out
    Timeout,
    /// SSL/TLS certificate error
    SslError,
    /// Too many redirects (redirect loop)
    TooManyRedirects,
    /// Could not resolve hostname
    DnsError,
    /// Other error (5xx, connection refused, ...)
    Error,
}

// Represents the result of checking a single link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCheckResult {
    /// The URL that was checked
    pub url: String,
    /// Slugs of the topics that link here
    pub found_in: Vec<String>,
    /// The status of the link
    #[serde(flatten)]
    pub status: LinkStatus,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LinkCheckResult {
    /// Returns true for Ok and Redirect statuses
    pub fn is_ok(&self) -> bool {
        matches!(self.status, LinkStatus::Ok | LinkStatus::Redirect(_))
    }
}

// Checks every link concurrently
//
// Returns results sorted by URL, so output is stable between runs.
// Fails only if the HTTP client itself cannot be built.
pub async fn check_links(targets: Vec<LinkTarget>, config: &Config) -> Result<Vec<LinkCheckResult>> {
    // One client for every request (connection pooling)
    let client = Client::builder()
        .timeout(config.timeout)
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent(concat!("content-registry/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to create HTTP client")?;

    Ok(check_with_client(&client, targets, config.concurrency).await)
}

// Runs the checks on an existing client, up to `concurrency` at a time
async fn check_with_client(client: &Client, targets: Vec<LinkTarget>, concurrency: usize) -> Vec<LinkCheckResult> {
    let futures = targets
        .into_iter()
        .map(|target| check_single_link(client, target));

    // buffer_unordered(0) would never poll anything
    let mut results: Vec<LinkCheckResult> = stream::iter(futures)
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    results.sort_by(|a, b| a.url.cmp(&b.url));
    results
}

// Checks a single link: HEAD first, GET if the server refuses HEAD
async fn check_single_link(client: &Client, target: LinkTarget) -> LinkCheckResult {
    let LinkTarget { url, found_in } = target;

    let mut result = client.head(&url).send().await;

    if matches!(&result, Ok(response) if response.status() == StatusCode::METHOD_NOT_ALLOWED) {
        debug!(url = %url, "HEAD not allowed, retrying with GET");
        result = client.get(&url).send().await;
    }

    let (status, message) = match result {
        Ok(response) => {
            let location = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok());
            classify_status(response.status(), location)
        }
        Err(e) => categorize_error(&e),
    };

    debug!(url = %url, ?status, "link checked");

    LinkCheckResult {
        url,
        found_in,
        status,
        message: Some(message),
    }
}

// Maps an HTTP status code to a LinkStatus
//
// HTTP status codes:
// - 200-299: Success
// - 300-399: Redirect (only seen when the redirect policy stops following)
// - 404/410: Broken
// - everything else: Error
fn classify_status(status_code: StatusCode, location: Option<&str>) -> (LinkStatus, String) {
    let code = status_code.as_u16();

    if status_code.is_success() {
        (LinkStatus::Ok, format!("HTTP {}", code))
    } else if status_code.is_redirection() {
        let target = location.unwrap_or("unknown").to_string();
        let message = format!("HTTP {} -> {}", code, target);
        (LinkStatus::Redirect(target), message)
    } else if matches!(status_code, StatusCode::NOT_FOUND | StatusCode::GONE) {
        (LinkStatus::Broken, format!("HTTP {}", code))
    } else {
        (LinkStatus::Error, format!("HTTP {}", code))
    }
}

// Categorizes the different ways a request can fail
fn categorize_error(error: &reqwest::Error) -> (LinkStatus, String) {
    let error_string = error.to_string().to_lowercase();

    if error.is_timeout() {
        (LinkStatus::Timeout, "Request timed out".to_string())
    } else if error.is_redirect() {
        (LinkStatus::TooManyRedirects, "Too many redirects".to_string())
    } else if error_string.contains("certificate") || error_string.contains("ssl") || error_string.contains("tls") {
        (LinkStatus::SslError, "SSL certificate error".to_string())
    } else if error.is_connect() {
        if error_string.contains("dns") {
            (LinkStatus::DnsError, "Could not resolve hostname".to_string())
        } else {
            (LinkStatus::Error, "Connection failed".to_string())
        }
    } else {
        (LinkStatus::Error, error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is StreamExt and buffer_unordered?
//    - buffer_unordered(N) runs up to N futures concurrently
//    - Results come back in completion order, which is why we sort afterwards
//
// 2. Why pass &Client instead of cloning it?
//    - Every future borrows the same client
//    - The futures are all awaited before check_with_client returns,
//      so the borrow checker is happy
//
// 3. What is matches!(x, pattern if cond)?
//    - A one-line `match` that returns bool
//    - The `if` guard lets us look inside the Ok value
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Minimal HTTP server on localhost
    //
    // /ok          -> 200
    // /missing     -> 404
    // /moved       -> 301 to /ok
    // /get-only    -> 405 for HEAD, 200 for GET
    // anything else -> 500
    async fn spawn_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 2048];
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]);
                    let mut parts = request.split_whitespace();
                    let method = parts.next().unwrap_or("");
                    let path = parts.next().unwrap_or("");

                    let head = match (method, path) {
                        (_, "/ok") => "200 OK\r\n".to_string(),
                        (_, "/missing") => "404 Not Found\r\n".to_string(),
                        (_, "/moved") => "301 Moved Permanently\r\nLocation: /ok\r\n".to_string(),
                        ("HEAD", "/get-only") => "405 Method Not Allowed\r\n".to_string(),
                        ("GET", "/get-only") => "200 OK\r\n".to_string(),
                        _ => "500 Internal Server Error\r\n".to_string(),
                    };
                    let response = format!(
                        "HTTP/1.1 {}Content-Length: 0\r\nConnection: close\r\n\r\n",
                        head
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    fn target(url: String) -> LinkTarget {
        LinkTarget {
            url,
            found_in: vec!["sql-joins".to_string()],
        }
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    fn status_of<'a>(results: &'a [LinkCheckResult], url: &str) -> &'a LinkStatus {
        &results.iter().find(|r| r.url == url).unwrap().status
    }

    #[tokio::test]
    async fn test_check_against_local_server() {
        let base = spawn_server().await;
        let ok = format!("{}/ok", base);
        let missing = format!("{}/missing", base);
        let moved = format!("{}/moved", base);
        let get_only = format!("{}/get-only", base);
        let failing = format!("{}/boom", base);

        let targets = vec![
            target(ok.clone()),
            target(missing.clone()),
            target(moved.clone()),
            target(get_only.clone()),
            target(failing.clone()),
        ];

        let results = check_with_client(&local_client(), targets, 4).await;

        assert_eq!(results.len(), 5);
        assert_eq!(status_of(&results, &ok), &LinkStatus::Ok);
        assert_eq!(status_of(&results, &missing), &LinkStatus::Broken);
        // The default redirect policy follows /moved to /ok
        assert_eq!(status_of(&results, &moved), &LinkStatus::Ok);
        assert_eq!(status_of(&results, &get_only), &LinkStatus::Ok);
        assert_eq!(status_of(&results, &failing), &LinkStatus::Error);

        // Sorted by URL and carrying the originating slugs
        let urls: Vec<_> = results.iter().map(|r| r.url.clone()).collect();
        let mut sorted = urls.clone();
        sorted.sort();
        assert_eq!(urls, sorted);
        assert!(results.iter().all(|r| r.found_in == vec!["sql-joins".to_string()]));
    }

    #[tokio::test]
    async fn test_connection_refused_is_error() {
        // Grab a free port, then close it
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/", addr);
        let results = check_with_client(&local_client(), vec![target(url)], 0).await;

        assert_eq!(results.len(), 1);
        assert!(!results[0].is_ok());
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(StatusCode::OK, None).0, LinkStatus::Ok);
        assert_eq!(
            classify_status(StatusCode::FOUND, Some("https://example.com/new")),
            (
                LinkStatus::Redirect("https://example.com/new".to_string()),
                "HTTP 302 -> https://example.com/new".to_string()
            )
        );
        assert_eq!(classify_status(StatusCode::GONE, None).0, LinkStatus::Broken);
        assert_eq!(
            classify_status(StatusCode::SERVICE_UNAVAILABLE, None),
            (LinkStatus::Error, "HTTP 503".to_string())
        );
    }

    #[test]
    fn test_link_result_is_ok() {
        let mut result = LinkCheckResult {
            url: "https://example.com".to_string(),
            found_in: Vec::new(),
            status: LinkStatus::Ok,
            message: None,
        };
        assert!(result.is_ok());

        result.status = LinkStatus::Redirect("https://example.com/".to_string());
        assert!(result.is_ok());

        result.status = LinkStatus::Broken;
        assert!(!result.is_ok());
    }

    #[test]
    fn test_result_json_shape() {
        let result = LinkCheckResult {
            url: "https://example.com/old".to_string(),
            found_in: vec!["tema-smarty".to_string()],
            status: LinkStatus::Broken,
            message: Some("HTTP 404".to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "broken");
        assert_eq!(json["found_in"][0], "tema-smarty");
        assert_eq!(json["message"], "HTTP 404");
    }
}
