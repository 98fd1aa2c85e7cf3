//! IDCF DNS API client: configuration, request signing and execution.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::codec::encode;
use crate::error::{DnsError, Result};
use crate::http_client::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, HttpRequest, HttpTransport,
    ReqwestTransport,
};
use crate::sign;
use crate::utils::log_sanitizer::mask_secret;

/// Production API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://dns.idcfcloud.com";

/// Authentication headers (`X-IDCF-APIKEY`, `X-IDCF-Expires`, `X-IDCF-Signature`).
pub const HEADER_API_KEY: &str = "x-idcf-apikey";
pub const HEADER_EXPIRES: &str = "x-idcf-expires";
pub const HEADER_SIGNATURE: &str = "x-idcf-signature";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "IDCF_API_KEY";
/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "IDCF_SECRET_KEY";
/// Optional environment variable overriding the endpoint.
pub const ENV_ENDPOINT: &str = "IDCF_DNS_ENDPOINT";

/// `params` value for calls without a body. Serializes as JSON `null`.
pub(crate) const NO_PARAMS: Option<&()> = None;

/// IDCF DNS API client.
///
/// Holds the endpoint, credentials and a shared HTTP transport. Immutable after
/// construction; safe to share between tasks.
pub struct Client {
    endpoint: Url,
    api_key: String,
    secret_key: String,
    transport: Arc<dyn HttpTransport>,
}

/// IDCF DNS Client Builder
pub struct ClientBuilder {
    api_key: String,
    secret_key: String,
    endpoint: String,
    connect_timeout: Duration,
    timeout: Duration,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            transport: None,
        }
    }

    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom transport. The timeout settings are then ignored.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Client> {
        let endpoint = parse_endpoint(&self.endpoint)?;
        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(self.connect_timeout, self.timeout)?),
        };

        Ok(Client {
            endpoint,
            api_key: self.api_key,
            secret_key: self.secret_key,
            transport,
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).map_err(|e| DnsError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        detail: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(DnsError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            detail: "endpoint cannot carry a path".to_string(),
        });
    }
    Ok(url)
}

impl Client {
    /// Client for the production endpoint.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key, secret_key).build()
    }

    pub fn builder(api_key: impl Into<String>, secret_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key.into(), secret_key.into())
    }

    /// Client configured from `IDCF_API_KEY`, `IDCF_SECRET_KEY` and optionally
    /// `IDCF_DNS_ENDPOINT`.
    pub fn from_env() -> Result<Self> {
        Self::builder_from_vars(|key| std::env::var(key).ok())?.build()
    }

    pub(crate) fn builder_from_vars<F>(lookup: F) -> Result<ClientBuilder>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| DnsError::MissingConfig {
                    key: key.to_string(),
                })
        };

        let mut builder = Self::builder(require(ENV_API_KEY)?, require(ENV_SECRET_KEY)?);
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.is_empty()) {
            builder = builder.endpoint(endpoint);
        }
        Ok(builder)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Send one signed request and return the raw response body.
    ///
    /// `path` replaces the endpoint's path. For POST and PUT, `params` is sent as the
    /// JSON body (`None` encodes as `null`); GET and DELETE carry no body. The status
    /// code is not inspected.
    pub async fn request<P>(&self, method: Method, path: &str, params: Option<&P>) -> Result<Vec<u8>>
    where
        P: Serialize + ?Sized,
    {
        let request = self.prepare(method, path, params, Utc::now().timestamp())?;
        self.transport.execute(request).await.inspect_err(|e| {
            if e.is_expected() {
                log::warn!("Request {path} failed: {e}");
            } else {
                log::error!("Request {path} failed: {e}");
            }
        })
    }

    /// Build the signed request for a send at `now` (Unix seconds).
    pub(crate) fn prepare<P>(
        &self,
        method: Method,
        path: &str,
        params: Option<&P>,
        now: i64,
    ) -> Result<HttpRequest>
    where
        P: Serialize + ?Sized,
    {
        let mut url = self.endpoint.clone();
        url.set_path(path);

        let expires = sign::expires_at(now);
        let signature = sign::sign(
            &self.secret_key,
            method.as_str(),
            path,
            &self.api_key,
            expires,
        );

        let mut headers = HeaderMap::new();
        headers.insert(HEADER_API_KEY, header_value(HEADER_API_KEY, &self.api_key)?);
        headers.insert(HEADER_EXPIRES, HeaderValue::from(expires));
        headers.insert(HEADER_SIGNATURE, header_value(HEADER_SIGNATURE, &signature)?);

        let has_body = method == Method::POST || method == Method::PUT;
        let body = if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            let payload = encode(&params)?;
            log::debug!("Request Body: {}", String::from_utf8_lossy(&payload));
            Some(payload)
        } else {
            None
        };

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| DnsError::InvalidHeader {
        name: name.to_string(),
        detail: e.to_string(),
    })
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key)
            .field("secret_key", &mask_secret(&self.secret_key))
            .finish_non_exhaustive()
    }
}
