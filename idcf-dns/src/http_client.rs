//! HTTP execution seam
//!
//! The client builds and signs every request itself and hands the finished
//! [`HttpRequest`] to an [`HttpTransport`]. The transport only sends bytes and
//! reads bytes back.
//!
//! # design principles
//! - **No status-code branching** - the API reports failures in the body, callers interpret it
//! - **No retries** - one outbound call per operation
//! - **Pluggable** - tests and embedders can supply their own transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use url::Url;

use crate::error::{DnsError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub(crate) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// A fully signed request, ready to go on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: Url,
    /// Authentication and content headers.
    pub headers: HeaderMap,
    /// JSON body, present for POST and PUT only.
    pub body: Option<Vec<u8>>,
}

/// Sends a signed request and returns the complete response body.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes `request` and returns the raw body, whatever the status code.
    async fn execute(&self, request: HttpRequest) -> Result<Vec<u8>>;
}

/// [`HttpTransport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given connect and overall request timeouts.
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| DnsError::NetworkError {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<Vec<u8>> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        log::debug!("{method} {url}");

        let mut builder = self.client.request(method, url.as_str()).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DnsError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                DnsError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        log::debug!("Response Status: {}", response.status().as_u16());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DnsError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "Response Body: {}",
            truncate_for_log(&String::from_utf8_lossy(&bytes))
        );

        Ok(bytes.to_vec())
    }
}
