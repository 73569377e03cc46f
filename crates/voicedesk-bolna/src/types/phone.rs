//! Phone number payloads returned by the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A phone number provisioned on the provider account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct BolnaPhoneNumber {
    /// Provider id of the number, when reported.
    #[serde(default, alias = "phone_number_id")]
    pub id: Option<String>,
    /// The number in E.164 form.
    pub phone_number: String,
    /// Telephony vendor hosting the number.
    #[serde(default)]
    pub telephony_provider: Option<String>,
    /// Agent currently answering inbound calls on this number.
    #[serde(default)]
    pub agent_id: Option<String>,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_listed_number() {
        let body = r#"{
            "id": "pn-1",
            "phone_number": "+14155550100",
            "telephony_provider": "twilio",
            "price": "1.15"
        }"#;

        let number: BolnaPhoneNumber = serde_json::from_str(body).unwrap();
        assert_eq!(number.id.as_deref(), Some("pn-1"));
        assert_eq!(number.phone_number, "+14155550100");
        assert_eq!(number.extra["price"], "1.15");
    }
}
