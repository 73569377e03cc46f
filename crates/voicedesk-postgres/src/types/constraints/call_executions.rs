//! Call executions table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Call execution table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum CallExecutionConstraints {
    // Validation constraints
    #[strum(serialize = "call_executions_duration_min")]
    DurationMin,

    // Unique constraints
    #[strum(serialize = "call_executions_bolna_execution_id_unique_idx")]
    BolnaExecutionIdUnique,
}

impl CallExecutionConstraints {
    /// Creates a new [`CallExecutionConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            CallExecutionConstraints::DurationMin => ConstraintCategory::Validation,
            CallExecutionConstraints::BolnaExecutionIdUnique => ConstraintCategory::Uniqueness,
        }
    }
}

impl From<CallExecutionConstraints> for String {
    #[inline]
    fn from(val: CallExecutionConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for CallExecutionConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
