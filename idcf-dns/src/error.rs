use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all IDCF DNS client operations.
///
/// Two variants carry the server's raw response as their entire display text:
/// - [`DecodeError`](Self::DecodeError): the body did not match the expected resource shape
/// - [`UnexpectedResponse`](Self::UnexpectedResponse): a delete/verify call did not get `{}` back
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum DnsError {
    /// The configured API endpoint is not a valid absolute URL.
    #[error("Invalid endpoint '{endpoint}': {detail}")]
    InvalidEndpoint {
        /// The rejected endpoint string.
        endpoint: String,
        /// Parser error details.
        detail: String,
    },

    /// A required configuration value was not provided.
    #[error("Missing configuration: {key}")]
    MissingConfig {
        /// Name of the missing setting (e.g. an environment variable).
        key: String,
    },

    /// A value could not be encoded as an HTTP header.
    #[error("Invalid header '{name}': {detail}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Encoding error details.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The response body could not be decoded into the expected resource.
    ///
    /// Displays as the raw body; the decoder's own message is kept in `detail`.
    #[error("{raw_body}")]
    DecodeError {
        /// Response body as received.
        raw_body: String,
        /// Decoder error details.
        detail: String,
    },

    /// A delete or verify call received something other than the `{}` success body.
    #[error("{raw_body}")]
    UnexpectedResponse {
        /// Response body as received.
        raw_body: String,
    },
}

impl DnsError {
    /// 是否为预期行为（配置错误、服务端拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidEndpoint { .. }
                | Self::MissingConfig { .. }
                | Self::InvalidHeader { .. }
                | Self::UnexpectedResponse { .. }
        )
    }

    pub(crate) fn decode(raw: &[u8], detail: impl ToString) -> Self {
        Self::DecodeError {
            raw_body: String::from_utf8_lossy(raw).into_owned(),
            detail: detail.to_string(),
        }
    }

    pub(crate) fn unexpected(raw: &[u8]) -> Self {
        Self::UnexpectedResponse {
            raw_body: String::from_utf8_lossy(raw).into_owned(),
        }
    }
}

/// Convenience type alias for `Result<T, DnsError>`.
pub type Result<T> = std::result::Result<T, DnsError>;
