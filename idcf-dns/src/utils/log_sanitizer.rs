//! Log sanitization utilities
//!
//! Response bodies may be large (record lists, DKIM keys in TXT content) and
//! credentials must never reach a log sink in full.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const MASK_VISIBLE: usize = 4;

/// Truncate a string for safe logging.
///
/// Strings within `TRUNCATE_LIMIT` bytes are returned unchanged; longer ones are cut
/// at the last char boundary at or before the limit and suffixed with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask a credential for `Debug` output: `abcd****`.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(MASK_VISIBLE).collect();
    if secret.chars().count() <= MASK_VISIBLE {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}
