//! JSON encode/decode for request bodies and API responses.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DnsError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Decode a response body.
///
/// Any failure (invalid JSON, unexpected shape, wrong field type, bad timestamp)
/// becomes [`DnsError::DecodeError`] carrying the body as received.
pub(crate) fn decode<T>(raw: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(raw).map_err(|e| {
        log::error!("JSON decode failed: {e}");
        log::error!(
            "Raw response: {}",
            truncate_for_log(&String::from_utf8_lossy(raw))
        );
        DnsError::decode(raw, e)
    })
}

/// Encode a request body.
pub(crate) fn encode<P>(params: &P) -> Result<Vec<u8>>
where
    P: Serialize + ?Sized,
{
    serde_json::to_vec(params).map_err(|e| DnsError::SerializationError {
        detail: e.to_string(),
    })
}

/// Check the `{}` body that delete and verify calls answer with on success.
pub(crate) fn expect_empty_object(raw: &[u8]) -> Result<()> {
    if raw == b"{}" {
        Ok(())
    } else {
        log::warn!(
            "Unexpected response: {}",
            truncate_for_log(&String::from_utf8_lossy(raw))
        );
        Err(DnsError::unexpected(raw))
    }
}
