//! HMAC-SHA256 webhook signature helpers.
//!
//! Bolna signs webhook deliveries with a shared secret over the raw request
//! body and sends the hex digest in the `x-bolna-signature` header.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs a payload using HMAC-SHA256, returning the hex digest.
pub fn sign_payload(secret: &str, payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);

    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

/// Verifies a received signature against the raw payload in constant time.
///
/// Accepts both a bare hex digest and the `sha256=<hex>` form. Returns
/// `false` for malformed signatures instead of erroring, so callers can
/// treat every failure as an authentication miss.
pub fn verify_signature(secret: &str, payload: &[u8], signature: &str) -> bool {
    let digest = signature.strip_prefix("sha256=").unwrap_or(signature);

    let Ok(received) = hex::decode(digest.trim()) else {
        return false;
    };

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);

    // Mac::verify_slice compares in constant time.
    mac.verify_slice(&received).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test";

    #[test]
    fn signs_and_verifies_round_trip() {
        let body = br#"{"execution_id":"exec-1","agent_id":"agent-123"}"#;

        let signature = sign_payload(SECRET, body);
        assert!(verify_signature(SECRET, body, &signature));
        assert!(verify_signature(SECRET, body, &format!("sha256={signature}")));
    }

    #[test]
    fn rejects_tampered_payloads() {
        let body = br#"{"execution_id":"exec-1"}"#;
        let signature = sign_payload(SECRET, body);

        assert!(!verify_signature(SECRET, br#"{"execution_id":"exec-2"}"#, &signature));
        assert!(!verify_signature("other-secret", body, &signature));
    }

    #[test]
    fn rejects_malformed_signatures() {
        let body = b"payload";
        assert!(!verify_signature(SECRET, body, "not-hex!"));
        assert!(!verify_signature(SECRET, body, ""));
    }
}
