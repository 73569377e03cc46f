//! Webhook signature verification service.

use std::fmt;

use voicedesk_bolna::signature;

use crate::handler::{ErrorKind, Result};

/// Tracing target for webhook verification.
const TRACING_TARGET: &str = "voicedesk_server::service::webhook";

/// Verifies provider webhook deliveries against the shared secret.
///
/// Verification is optional: without a configured secret every delivery is
/// accepted, which is the development-environment mode.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Option<String>,
}

impl WebhookVerifier {
    /// Creates a verifier; `None` disables signature checks.
    pub fn new(secret: Option<String>) -> Self {
        if secret.is_none() {
            tracing::warn!(
                target: TRACING_TARGET,
                "webhook secret not configured, accepting unsigned deliveries"
            );
        }

        Self { secret }
    }

    /// Returns whether signature checks are active.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    /// Checks a delivery's signature against the raw body.
    ///
    /// # Errors
    ///
    /// Returns 401 when a secret is configured and the signature header is
    /// missing or does not match the body.
    pub fn verify(&self, body: &[u8], signature: Option<&str>) -> Result<()> {
        let Some(secret) = &self.secret else {
            return Ok(());
        };

        let Some(signature) = signature else {
            tracing::warn!(
                target: TRACING_TARGET,
                "webhook delivery rejected, signature header missing"
            );

            return Err(ErrorKind::Unauthorized
                .with_message("Missing webhook signature")
                .with_resource("webhook"));
        };

        if !signature::verify_signature(secret, body, signature) {
            tracing::warn!(
                target: TRACING_TARGET,
                "webhook delivery rejected, signature mismatch"
            );

            return Err(ErrorKind::Unauthorized
                .with_message("Invalid webhook signature")
                .with_resource("webhook"));
        }

        Ok(())
    }
}

impl fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";

    #[test]
    fn accepts_valid_signatures() {
        let verifier = WebhookVerifier::new(Some(SECRET.to_owned()));
        let body = br#"{"execution_id":"exec-1","agent_id":"agent-1"}"#;
        let signature = signature::sign_payload(SECRET, body);

        assert!(verifier.verify(body, Some(&signature)).is_ok());
    }

    #[test]
    fn rejects_missing_and_mismatched_signatures() {
        let verifier = WebhookVerifier::new(Some(SECRET.to_owned()));
        let body = br#"{"execution_id":"exec-1","agent_id":"agent-1"}"#;

        let error = verifier.verify(body, None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Unauthorized);

        let wrong = signature::sign_payload("other-secret", body);
        let error = verifier.verify(body, Some(&wrong)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn unsigned_mode_accepts_everything() {
        let verifier = WebhookVerifier::new(None);
        assert!(!verifier.is_enabled());
        assert!(verifier.verify(b"anything", None).is_ok());
    }

    #[test]
    fn debug_hides_the_secret() {
        let verifier = WebhookVerifier::new(Some(SECRET.to_owned()));
        let rendered = format!("{verifier:?}");
        assert!(!rendered.contains(SECRET));
    }
}
