//! IDCF request signing (HMAC-SHA256, base64)

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Lifetime of a signed request, in seconds.
pub const EXPIRY_WINDOW_SECS: i64 = 600;

/// Expiry timestamp for a request sent at `now` (Unix seconds).
pub fn expires_at(now: i64) -> i64 {
    now + EXPIRY_WINDOW_SECS
}

/// 拼接规范签名串: `METHOD\nPATH\nAPIKEY\nEXPIRES\n`
pub fn canonical_string(method: &str, path: &str, api_key: &str, expires: i64) -> String {
    format!("{method}\n{path}\n{api_key}\n{expires}\n")
}

/// Computes the `X-IDCF-Signature` value for one request.
pub fn sign(secret_key: &str, method: &str, path: &str, api_key: &str, expires: i64) -> String {
    let canonical = canonical_string(method, path, api_key, expires);
    STANDARD.encode(hmac_sha256(secret_key.as_bytes(), canonical.as_bytes()))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPIRES: i64 = 1_705_306_200;

    fn sig(method: &str, path: &str) -> String {
        sign("test_secret_key", method, path, "test_api_key", EXPIRES)
    }

    // ---- 规范串格式 ----

    #[test]
    fn canonical_string_has_trailing_newline() {
        assert_eq!(
            canonical_string("GET", "/api/v1/zones", "key", 1_500_000_600),
            "GET\n/api/v1/zones\nkey\n1500000600\n"
        );
    }

    #[test]
    fn expires_is_ten_minutes_ahead() {
        assert_eq!(expires_at(1_705_305_600), 1_705_306_200);
    }

    // ---- 输出格式 ----

    #[test]
    fn signature_is_base64_of_sha256_digest() {
        let s = sig("GET", "/api/v1/zones");
        // 32 bytes -> 44 chars of padded base64
        assert_eq!(s.len(), 44);
        assert!(s.ends_with('='));
        let decoded = STANDARD.decode(&s).unwrap();
        assert_eq!(decoded.len(), 32);
    }

    #[test]
    fn matches_hmac_over_canonical_string() {
        let mut mac = HmacSha256::new_from_slice(b"test_secret_key").unwrap();
        mac.update(b"POST\n/api/v1/zones\ntest_api_key\n1705306200\n");
        let expected = STANDARD.encode(mac.finalize().into_bytes());
        assert_eq!(sig("POST", "/api/v1/zones"), expected);
    }

    // ---- 确定性 ----

    #[test]
    fn deterministic() {
        assert_eq!(sig("GET", "/api/v1/zones"), sig("GET", "/api/v1/zones"));
    }

    // ---- 任一输入变化都改变签名 ----

    #[test]
    fn different_method_changes_signature() {
        assert_ne!(sig("GET", "/api/v1/zones"), sig("POST", "/api/v1/zones"));
    }

    #[test]
    fn different_path_changes_signature() {
        assert_ne!(sig("GET", "/api/v1/zones"), sig("GET", "/api/v1/zones/abc"));
    }

    #[test]
    fn different_api_key_changes_signature() {
        let a = sign("secret", "GET", "/api/v1/zones", "key_alpha", EXPIRES);
        let b = sign("secret", "GET", "/api/v1/zones", "key_beta", EXPIRES);
        assert_ne!(a, b);
    }

    #[test]
    fn different_expiry_changes_signature() {
        let a = sign("secret", "GET", "/api/v1/zones", "key", EXPIRES);
        let b = sign("secret", "GET", "/api/v1/zones", "key", EXPIRES + 1);
        assert_ne!(a, b);
    }

    #[test]
    fn different_secret_changes_signature() {
        let a = sign("secret_alpha", "GET", "/api/v1/zones", "key", EXPIRES);
        let b = sign("secret_beta", "GET", "/api/v1/zones", "key", EXPIRES);
        assert_ne!(a, b);
    }

    // ---- 字段边界不会串位 ----

    #[test]
    fn field_boundaries_do_not_collide() {
        assert_ne!(sig("GETX", ""), sig("GET", "X"));
        assert_ne!(
            canonical_string("GETX", "", "k", 1),
            canonical_string("GET", "X", "k", 1)
        );
        let a = sign("s", "GET", "/a", "b", EXPIRES);
        let b = sign("s", "GET", "/ab", "", EXPIRES);
        assert_ne!(a, b);
    }
}
