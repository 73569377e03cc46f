//! Path parameter types for HTTP handlers.
//!
//! Field names are deliberately left in snake case so they line up with the
//! route placeholders (`{tenant_id}`, `{agent_id}`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Path parameters for tenant-level administration.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TenantPathParams {
    /// Unique identifier of the tenant.
    pub tenant_id: Uuid,
}

/// Path parameters for tenant-user administration.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UserPathParams {
    /// Unique identifier of the tenant user.
    pub user_id: Uuid,
}

/// Path parameters for the slug-scoped login route.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TenantSlugPathParams {
    /// URL-safe tenant identifier.
    pub slug: String,
}

/// Path parameters for provider agent operations.
///
/// Carries the provider-side agent id, not the local row id.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AgentPathParams {
    /// Agent id on the upstream provider.
    pub agent_id: String,
}

/// Path parameters for provider call-execution operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExecutionPathParams {
    /// Execution id on the upstream provider.
    pub execution_id: String,
}

/// Path parameters for provider batch operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BatchPathParams {
    /// Batch id on the upstream provider.
    pub batch_id: String,
}

/// Path parameters for provider knowledgebase operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct KnowledgebasePathParams {
    /// Knowledgebase id on the upstream provider.
    pub knowledgebase_id: String,
}

/// Path parameters for credential-store lookups.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CredentialPathParams {
    /// Name of the stored credential, e.g. `bolna_api_key`.
    pub key: String,
}
