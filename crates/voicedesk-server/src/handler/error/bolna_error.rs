//! Provider error to HTTP error conversion.
//!
//! Upstream failures carried by [`BolnaError`] are mapped onto the handler
//! error type. Non-2xx provider answers are relayed with their original
//! status and body; a missing credential surfaces as 502 so callers can
//! distinguish "rotate the key" from a genuine server fault.

use voicedesk_bolna::BolnaError;

use crate::handler::{Error, ErrorKind};

/// Tracing target for provider error conversions.
const TRACING_TARGET: &str = "voicedesk_server::provider_errors";

/// Longest upstream body fragment relayed to clients.
const MAX_RELAYED_BODY: usize = 512;

/// Trims an upstream response body down to something safe to relay.
fn relayed_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "The upstream provider could not complete the request".to_owned();
    }

    if trimmed.len() <= MAX_RELAYED_BODY {
        return trimmed.to_owned();
    }

    let mut cut = MAX_RELAYED_BODY;
    while !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &trimmed[..cut])
}

impl From<BolnaError> for Error<'static> {
    fn from(error: BolnaError) -> Self {
        match error {
            BolnaError::NotConfigured => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    "provider call attempted without a stored API key"
                );
                ErrorKind::BadGateway
                    .with_message("provider credential not configured")
                    .into_static()
            }
            BolnaError::InvalidInput(message) => {
                ErrorKind::BadRequest.with_message(message).into_static()
            }
            BolnaError::Http { status, body } => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    status = status.as_u16(),
                    "provider returned an error response"
                );
                ErrorKind::BadGateway
                    .with_message(relayed_body(body))
                    .with_status(status)
                    .into_static()
            }
            BolnaError::Transport(transport_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %transport_error,
                    "provider request failed in transit"
                );
                ErrorKind::BadGateway
                    .with_message("The upstream provider could not be reached")
                    .into_static()
            }
            BolnaError::Serde(serde_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %serde_error,
                    "provider response could not be decoded"
                );
                ErrorKind::InternalServerError.into_error()
            }
            BolnaError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "provider client configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn missing_credential_maps_to_bad_gateway() {
        let error: Error = BolnaError::NotConfigured.into();
        assert_eq!(error.kind(), ErrorKind::BadGateway);
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(error.message(), Some("provider credential not configured"));
    }

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let error: Error =
            BolnaError::invalid_input("Must provide either 'file' or 'url' parameter").into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(
            error.message(),
            Some("Must provide either 'file' or 'url' parameter")
        );
    }

    #[test]
    fn upstream_status_and_body_are_relayed() {
        let error: Error = BolnaError::Http {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: "agent_config missing".to_owned(),
        }
        .into();

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.message(), Some("agent_config missing"));
    }

    #[test]
    fn oversized_upstream_bodies_are_truncated() {
        let error: Error = BolnaError::Http {
            status: StatusCode::BAD_GATEWAY,
            body: "x".repeat(2 * MAX_RELAYED_BODY),
        }
        .into();

        let message = error.message().unwrap();
        assert!(message.len() <= MAX_RELAYED_BODY + 3);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn empty_upstream_bodies_get_a_fallback_message() {
        let error: Error = BolnaError::Http {
            status: StatusCode::BAD_GATEWAY,
            body: "   ".to_owned(),
        }
        .into();

        assert!(error.message().unwrap().contains("upstream provider"));
    }
}
