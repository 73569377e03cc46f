//! Execution history query parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use voicedesk_bolna::types::ExecutionFilters;

/// Query parameters for an agent's upstream execution history.
///
/// Parameter names mirror the provider API verbatim (snake case), so
/// existing front-end calls keep working when pointed at this proxy.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExecutionHistoryQuery {
    /// 1-based page number; defaults to the first page.
    pub page_number: Option<usize>,
    /// Number of executions per page; defaults to 20, capped at 100.
    pub page_size: Option<usize>,
    /// Filter by call status, e.g. `completed`.
    pub status: Option<String>,
    /// Filter by call direction, e.g. `outbound`.
    pub call_type: Option<String>,
    /// Filter by telephony provider.
    pub provider: Option<String>,
    /// Inclusive lower bound on the execution date, ISO 8601.
    pub start_date: Option<String>,
    /// Inclusive upper bound on the execution date, ISO 8601.
    pub end_date: Option<String>,
}

impl ExecutionHistoryQuery {
    /// Default number of executions per page.
    const DEFAULT_PAGE_SIZE: usize = 20;
    /// Largest page size relayed to the provider.
    const MAX_PAGE_SIZE: usize = 100;

    /// Returns the 1-based page number to request.
    pub fn page_number(&self) -> usize {
        self.page_number.unwrap_or(1).max(1)
    }

    /// Returns the clamped page size to request.
    pub fn page_size(&self) -> usize {
        self.page_size
            .unwrap_or(Self::DEFAULT_PAGE_SIZE)
            .clamp(1, Self::MAX_PAGE_SIZE)
    }

    /// Extracts the provider-side filters from the query.
    pub fn filters(&self) -> ExecutionFilters {
        ExecutionFilters {
            status: self.status.clone(),
            call_type: self.call_type.clone(),
            provider: self.provider.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_and_clamps() {
        let query = ExecutionHistoryQuery::default();
        assert_eq!(query.page_number(), 1);
        assert_eq!(query.page_size(), 20);

        let query = ExecutionHistoryQuery {
            page_number: Some(0),
            page_size: Some(10_000),
            ..Default::default()
        };
        assert_eq!(query.page_number(), 1);
        assert_eq!(query.page_size(), 100);
    }

    #[test]
    fn filters_carry_only_set_fields() {
        let query = ExecutionHistoryQuery {
            status: Some("completed".to_owned()),
            ..Default::default()
        };

        let filters = query.filters();
        assert_eq!(filters.status.as_deref(), Some("completed"));
        assert!(filters.call_type.is_none());
    }
}
