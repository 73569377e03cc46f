//! Agents table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Agent table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum AgentConstraints {
    // Unique constraints
    #[strum(serialize = "agents_bolna_agent_id_unique_idx")]
    BolnaAgentIdUnique,
}

impl AgentConstraints {
    /// Creates a new [`AgentConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            AgentConstraints::BolnaAgentIdUnique => ConstraintCategory::Uniqueness,
        }
    }
}

impl From<AgentConstraints> for String {
    #[inline]
    fn from(val: AgentConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for AgentConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
