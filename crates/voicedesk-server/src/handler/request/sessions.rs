//! Login request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials submitted to any of the login endpoints.
///
/// The same payload serves super-admin and tenant-user logins; the route
/// decides which principal table is consulted.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    /// Login email address.
    #[validate(email)]
    pub email: String,
    /// Account password, verified against the stored Argon2 hash.
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_email() {
        let request = LoginCredentials {
            email: "not-an-email".to_owned(),
            password: "hunter2!".to_owned(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn rejects_empty_password() {
        let request = LoginCredentials {
            email: "user@example.com".to_owned(),
            password: String::new(),
        };

        assert!(request.validate().is_err());
    }
}
