//! Sub-account payloads returned by the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response to a successful sub-account creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CreatedSubaccount {
    /// Provider id of the new sub-account.
    #[serde(alias = "sub_account_id", alias = "id")]
    pub subaccount_id: String,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sub_account_id_alias() {
        let created: CreatedSubaccount =
            serde_json::from_str(r#"{"sub_account_id": "sa-42", "name": "acme"}"#).unwrap();
        assert_eq!(created.subaccount_id, "sa-42");
    }
}
