//! Database constraint violations organized by table.
//!
//! Constraint names in these enums mirror the names declared in the SQL
//! migrations, so violations reported by `PostgreSQL` can be parsed back
//! into typed values.

pub mod agents;
pub mod call_executions;
pub mod campaigns;
pub mod super_admins;
pub mod tenant_users;
pub mod tenants;

use std::fmt;

pub use agents::AgentConstraints;
pub use call_executions::CallExecutionConstraints;
pub use campaigns::CampaignConstraints;
use serde::{Deserialize, Serialize};
pub use super_admins::SuperAdminConstraints;
pub use tenant_users::TenantUserConstraints;
pub use tenants::TenantConstraints;

/// Unified constraint violation enum that can represent any database constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ConstraintViolation {
    SuperAdmin(SuperAdminConstraints),
    Tenant(TenantConstraints),
    TenantUser(TenantUserConstraints),
    Agent(AgentConstraints),
    Campaign(CampaignConstraints),
    CallExecution(CallExecutionConstraints),
}

/// Categories of database constraint violations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintCategory {
    /// Data validation constraints (format, length, range checks).
    Validation,
    /// Uniqueness constraints (primary keys, unique indexes).
    Uniqueness,
}

impl ConstraintViolation {
    /// Creates a new [`ConstraintViolation`] from the constraint name.
    ///
    /// Returns `None` if the constraint name is not recognized.
    pub fn new(constraint: &str) -> Option<Self> {
        // Route on the table prefix before attempting to parse.
        if constraint.starts_with("super_admins_") {
            if let Some(c) = SuperAdminConstraints::new(constraint) {
                return Some(ConstraintViolation::SuperAdmin(c));
            }
        } else if constraint.starts_with("tenants_") {
            if let Some(c) = TenantConstraints::new(constraint) {
                return Some(ConstraintViolation::Tenant(c));
            }
        } else if constraint.starts_with("tenant_users_") {
            if let Some(c) = TenantUserConstraints::new(constraint) {
                return Some(ConstraintViolation::TenantUser(c));
            }
        } else if constraint.starts_with("agents_") {
            if let Some(c) = AgentConstraints::new(constraint) {
                return Some(ConstraintViolation::Agent(c));
            }
        } else if constraint.starts_with("campaigns_") {
            if let Some(c) = CampaignConstraints::new(constraint) {
                return Some(ConstraintViolation::Campaign(c));
            }
        } else if constraint.starts_with("call_executions_")
            && let Some(c) = CallExecutionConstraints::new(constraint)
        {
            return Some(ConstraintViolation::CallExecution(c));
        }

        None
    }

    /// Returns the table name associated with this constraint.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConstraintViolation::SuperAdmin(_) => "super_admins",
            ConstraintViolation::Tenant(_) => "tenants",
            ConstraintViolation::TenantUser(_) => "tenant_users",
            ConstraintViolation::Agent(_) => "agents",
            ConstraintViolation::Campaign(_) => "campaigns",
            ConstraintViolation::CallExecution(_) => "call_executions",
        }
    }

    /// Returns the category of this constraint violation.
    pub fn constraint_category(&self) -> ConstraintCategory {
        match self {
            ConstraintViolation::SuperAdmin(c) => c.categorize(),
            ConstraintViolation::Tenant(c) => c.categorize(),
            ConstraintViolation::TenantUser(c) => c.categorize(),
            ConstraintViolation::Agent(c) => c.categorize(),
            ConstraintViolation::Campaign(c) => c.categorize(),
            ConstraintViolation::CallExecution(c) => c.categorize(),
        }
    }

    /// Returns the underlying constraint name as used in the database.
    #[inline]
    pub fn constraint_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::SuperAdmin(c) => write!(f, "{}", c),
            ConstraintViolation::Tenant(c) => write!(f, "{}", c),
            ConstraintViolation::TenantUser(c) => write!(f, "{}", c),
            ConstraintViolation::Agent(c) => write!(f, "{}", c),
            ConstraintViolation::Campaign(c) => write!(f, "{}", c),
            ConstraintViolation::CallExecution(c) => write!(f, "{}", c),
        }
    }
}

impl From<ConstraintViolation> for String {
    #[inline]
    fn from(val: ConstraintViolation) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for ConstraintViolation {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| format!("Unknown constraint: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_constraint_names() {
        assert_eq!(
            ConstraintViolation::new("tenant_users_email_unique_idx"),
            Some(ConstraintViolation::TenantUser(
                TenantUserConstraints::EmailUnique
            ))
        );

        assert_eq!(
            ConstraintViolation::new("tenants_slug_format"),
            Some(ConstraintViolation::Tenant(TenantConstraints::SlugFormat))
        );

        assert_eq!(ConstraintViolation::new("unknown_constraint"), None);
    }

    #[test]
    fn extracts_table_names() {
        let violation = ConstraintViolation::SuperAdmin(SuperAdminConstraints::EmailUnique);
        assert_eq!(violation.table_name(), "super_admins");

        let violation =
            ConstraintViolation::CallExecution(CallExecutionConstraints::BolnaExecutionIdUnique);
        assert_eq!(violation.table_name(), "call_executions");
    }

    #[test]
    fn categorizes_constraints() {
        let violation = ConstraintViolation::Tenant(TenantConstraints::DisplayNameLength);
        assert_eq!(
            violation.constraint_category(),
            ConstraintCategory::Validation
        );

        let violation = ConstraintViolation::Agent(AgentConstraints::BolnaAgentIdUnique);
        assert_eq!(
            violation.constraint_category(),
            ConstraintCategory::Uniqueness
        );
    }

    #[test]
    fn round_trips_constraint_names() {
        let violation = ConstraintViolation::Campaign(CampaignConstraints::DisplayNameLength);
        assert_eq!(violation.constraint_name(), "campaigns_display_name_length");
        assert_eq!(
            ConstraintViolation::new(&violation.constraint_name()),
            Some(violation)
        );
    }
}
