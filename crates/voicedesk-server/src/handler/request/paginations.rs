//! Pagination query parameters for list endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use voicedesk_postgres::types::{DEFAULT_LIMIT, OffsetPagination};

/// Page-based pagination accepted by every local list endpoint.
///
/// Pages are 1-based; unset fields fall back to the first page and the
/// default page size. Out-of-range values are clamped, never rejected.
#[must_use]
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    /// 1-based page number.
    pub page: Option<i64>,
    /// Number of rows per page.
    pub page_size: Option<i64>,
}

impl PaginationQuery {
    /// Converts the query parameters into a clamped offset/limit pair.
    pub fn into_pagination(self) -> OffsetPagination {
        OffsetPagination::from_page(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

impl From<PaginationQuery> for OffsetPagination {
    #[inline]
    fn from(query: PaginationQuery) -> Self {
        query.into_pagination()
    }
}

#[cfg(test)]
mod tests {
    use voicedesk_postgres::types::MAX_LIMIT;

    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let pagination = PaginationQuery::default().into_pagination();
        assert_eq!(pagination.offset, 0);
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn converts_pages_to_offsets() {
        let query = PaginationQuery {
            page: Some(3),
            page_size: Some(20),
        };

        let pagination = query.into_pagination();
        assert_eq!(pagination.offset, 40);
        assert_eq!(pagination.limit, 20);
    }

    #[test]
    fn clamps_oversized_page_sizes() {
        let query = PaginationQuery {
            page: Some(1),
            page_size: Some(1_000_000),
        };

        assert_eq!(query.into_pagination().limit, MAX_LIMIT);
    }

    #[test]
    fn deserializes_camel_case_parameters() {
        let query: PaginationQuery =
            serde_json::from_str(r#"{"page": 2, "pageSize": 10}"#).unwrap();
        assert_eq!(query.page, Some(2));
        assert_eq!(query.page_size, Some(10));
    }
}
