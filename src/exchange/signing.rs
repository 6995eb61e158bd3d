//! Request Signing
//!
//! Private endpoints take a `timestamp` parameter and a `signature` that is
//! the hex HMAC-SHA256 of the query string, keyed with the secret key.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex HMAC-SHA256 of `payload`
pub fn sign(secret: &str, payload: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Build `k=v&...` from the parameters and append its signature
pub fn signed_query(secret: &str, params: &[(&str, String)]) -> String {
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    let signature = sign(secret, &query);
    format!("{}&signature={}", query, signature)
}

/// Current time in milliseconds since the epoch
pub fn timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_rfc4231_case_2() {
        // RFC 4231 test case 2
        assert_eq!(
            sign("Jefe", "what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_signed_query_layout() {
        let query = signed_query("secret", &[("timestamp", "1700000000000".to_string())]);
        let (payload, signature) = query.split_once("&signature=").unwrap();

        assert_eq!(payload, "timestamp=1700000000000");
        assert_eq!(signature, sign("secret", "timestamp=1700000000000"));
        assert_eq!(signature.len(), 64);
    }

    #[test]
    fn test_signed_query_keeps_param_order() {
        let query = signed_query(
            "secret",
            &[
                ("timestamp", "1".to_string()),
                ("listenKey", "abc".to_string()),
            ],
        );
        assert!(query.starts_with("timestamp=1&listenKey=abc&signature="));
    }
}
