//! Knowledgebase operations.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::BolnaClient;
use crate::TRACING_TARGET_API;
use crate::error::{BolnaError, BolnaResult};
use crate::types::{Knowledgebase, KnowledgebaseFile};

impl BolnaClient {
    /// Lists the account's knowledgebases.
    ///
    /// Accounts without knowledgebase access answer 404; that degrades to
    /// an empty list rather than an error.
    pub async fn list_knowledgebases(&self) -> BolnaResult<Vec<Knowledgebase>> {
        match self.get_json("knowledgebase/all").await {
            Ok(knowledgebases) => Ok(knowledgebases),
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// Creates a knowledgebase from an uploaded file or a source URL.
    ///
    /// Exactly one source must be given; the file wins when both are. With
    /// neither, fails without contacting the provider.
    pub async fn create_knowledgebase(
        &self,
        file: Option<KnowledgebaseFile>,
        url: Option<&str>,
    ) -> BolnaResult<Value> {
        let form = match (file, url) {
            (Some(file), _) => {
                tracing::debug!(
                    target: TRACING_TARGET_API,
                    file_name = %file.file_name,
                    "creating knowledgebase from file"
                );

                let part = Part::bytes(file.content).file_name(file.file_name);
                Form::new().part("file", part)
            }
            (None, Some(url)) => {
                tracing::debug!(target: TRACING_TARGET_API, "creating knowledgebase from URL");
                Form::new().text("url", url.to_owned())
            }
            (None, None) => {
                return Err(BolnaError::invalid_input(
                    "Must provide either 'file' or 'url' parameter",
                ));
            }
        };

        let request = self.request(Method::POST, "knowledgebase")?.multipart(form);
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Deletes a knowledgebase.
    pub async fn delete_knowledgebase(&self, knowledgebase_id: &str) -> BolnaResult<Value> {
        self.delete_json(&format!("knowledgebase/{knowledgebase_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BolnaConfig;

    #[tokio::test]
    async fn rejects_creation_without_a_source() {
        let config = BolnaConfig::new(BolnaConfig::default_base_url(), "bn-test-key");
        let client = BolnaClient::new(config).unwrap();

        let err = client.create_knowledgebase(None, None).await.unwrap_err();
        assert!(matches!(
            err,
            BolnaError::InvalidInput(ref message)
                if message == "Must provide either 'file' or 'url' parameter"
        ));
    }
}
