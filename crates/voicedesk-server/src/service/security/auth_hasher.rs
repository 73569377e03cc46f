//! Password hashing and verification using Argon2id.
//!
//! Hashing and verification are called from HTTP handlers, so failures map
//! directly to HTTP error responses safe for client consumption.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as ArgonError, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier};
use uuid::Uuid;

use crate::handler::{ErrorKind, Result};

/// Target identifier for password hashing service logging and error reporting.
const TRACING_TARGET_AUTH_HASHER: &str = "voicedesk_server::service::auth_hasher";

/// Password hashing and verification service using Argon2id.
///
/// Uses the default Argon2id parameters, which follow current OWASP
/// recommendations.
#[derive(Debug, Clone)]
pub struct AuthHasher {
    argon2: Argon2<'static>,
}

impl AuthHasher {
    /// Creates a new instance of the [`AuthHasher`] service.
    pub fn new() -> Self {
        let argon2 = Argon2::default();
        Self { argon2 }
    }

    /// Hashes a password using Argon2id with a fresh random salt.
    ///
    /// # Returns
    ///
    /// A PHC string format hash that includes the algorithm, parameters,
    /// salt, and hash value. This can be stored directly in a database.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InternalServerError` with a user-friendly message
    /// if salt generation or the hashing operation fails. The plaintext is
    /// never logged.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::try_from_rng(&mut OsRng).map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_AUTH_HASHER,
                error = %e,
                "failed to generate cryptographically secure salt"
            );

            ErrorKind::InternalServerError
                .with_message("Password processing failed")
                .with_context("Salt generation error")
                .with_resource("authentication")
        })?;

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(
                    target: TRACING_TARGET_AUTH_HASHER,
                    error = %e,
                    "password hashing operation failed"
                );

                ErrorKind::InternalServerError
                    .with_message("Password processing failed")
                    .with_context("Hash generation error")
                    .with_resource("authentication")
            })?;

        Ok(password_hash.to_string())
    }

    /// Verifies a password against a stored PHC format hash.
    ///
    /// # Errors
    ///
    /// Returns different HTTP errors based on failure type:
    /// - `ErrorKind::Unauthorized` for incorrect passwords
    /// - `ErrorKind::InternalServerError` for invalid hash format or system errors
    ///
    /// The error messages never reveal why verification failed beyond the
    /// status code, so they cannot be used to probe for valid accounts.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<()> {
        let parsed_hash = PasswordHash::new(stored_hash).map_err(|e| {
            tracing::warn!(
                target: TRACING_TARGET_AUTH_HASHER,
                error = %e,
                "Invalid password hash format provided"
            );

            ErrorKind::InternalServerError
                .with_message("Authentication system temporarily unavailable")
                .with_context("Hash format error")
                .with_resource("authentication")
        })?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => {
                tracing::debug!(
                    target: TRACING_TARGET_AUTH_HASHER,
                    "Password verification successful"
                );

                Ok(())
            }
            Err(ArgonError::Password) => {
                tracing::debug!(
                    target: TRACING_TARGET_AUTH_HASHER,
                    "Password verification failed: incorrect password provided"
                );

                Err(ErrorKind::Unauthorized
                    .with_message("Authentication failed")
                    .with_context("Invalid credentials")
                    .with_resource("authentication"))
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_AUTH_HASHER,
                    error = %e,
                    "Password verification system error"
                );

                Err(ErrorKind::InternalServerError
                    .with_message("Authentication temporarily unavailable")
                    .with_context("Verification error")
                    .with_resource("authentication"))
            }
        }
    }

    /// Performs a dummy password verification to maintain consistent timing.
    ///
    /// Called when no account matches the submitted email, so that a login
    /// against a missing account burns the same work as one against a real
    /// account and timing cannot be used to enumerate accounts. Always
    /// returns `false`.
    pub fn verify_dummy_password(&self, password: &str) -> bool {
        // The dummy plaintext only needs to be unpredictable, not secret.
        let dummy_password = Uuid::new_v4().to_string();

        if let Ok(dummy_hash) = self.hash_password(&dummy_password) {
            let _ = self.verify_password(password, &dummy_hash);
        }

        false
    }
}

impl Default for AuthHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() -> anyhow::Result<()> {
        let hasher = AuthHasher::new();
        let password = "secure_password_123";
        let hash = hasher.hash_password(password)?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password(password, &hash).is_ok());
        assert!(hasher.verify_password("wrong_password", &hash).is_err());

        Ok(())
    }

    #[test]
    fn hash_produces_unique_salts() -> anyhow::Result<()> {
        let hasher = AuthHasher::new();
        let password = "test_password";

        let hash1 = hasher.hash_password(password)?;
        let hash2 = hasher.hash_password(password)?;

        assert_ne!(hash1, hash2);
        assert!(hasher.verify_password(password, &hash1).is_ok());
        assert!(hasher.verify_password(password, &hash2).is_ok());

        Ok(())
    }

    #[test]
    fn verify_password_returns_unauthorized_for_wrong_password() -> anyhow::Result<()> {
        let hasher = AuthHasher::new();
        let hash = hasher.hash_password("correct_password")?;

        let result = hasher.verify_password("wrong_password", &hash);
        let error = result.expect_err("wrong password must be rejected");
        assert_eq!(error.kind(), ErrorKind::Unauthorized);

        Ok(())
    }

    #[test]
    fn verify_password_returns_error_for_invalid_hash() {
        let hasher = AuthHasher::new();

        let result = hasher.verify_password("test_password", "invalid_hash_format");
        let error = result.expect_err("malformed hash must be rejected");
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn dummy_verification_always_fails() {
        let hasher = AuthHasher::new();

        assert!(!hasher.verify_dummy_password("any_password"));
        assert!(!hasher.verify_dummy_password(""));
    }
}
