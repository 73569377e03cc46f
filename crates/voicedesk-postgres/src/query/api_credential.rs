//! API credential repository.
//!
//! Credentials are a small key value store for provider secrets shared by
//! every tenant. Values never appear in logs, see the masked [`Debug`]
//! impls on the models.

use std::future::Future;

use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{ApiCredential, NewApiCredential};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for API credential database operations.
pub trait ApiCredentialRepository {
    /// Finds a credential by its key.
    fn get_credential(
        &mut self,
        credential_key: &str,
    ) -> impl Future<Output = PgResult<Option<ApiCredential>>> + Send;

    /// Stores a credential, replacing the value if the key already exists.
    fn put_credential(
        &mut self,
        credential: NewApiCredential,
    ) -> impl Future<Output = PgResult<ApiCredential>> + Send;

    /// Reports whether a credential with this key exists, without reading
    /// its value.
    fn credential_exists(
        &mut self,
        credential_key: &str,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl ApiCredentialRepository for PgConnection {
    async fn get_credential(&mut self, credential_key: &str) -> PgResult<Option<ApiCredential>> {
        use schema::api_credentials::dsl::*;

        api_credentials
            .filter(key.eq(credential_key))
            .select(ApiCredential::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn put_credential(&mut self, credential: NewApiCredential) -> PgResult<ApiCredential> {
        use schema::api_credentials::dsl::*;

        let credential = diesel::insert_into(api_credentials)
            .values(&credential)
            .on_conflict(key)
            .do_update()
            .set((value.eq(&credential.value), updated_at.eq(now)))
            .returning(ApiCredential::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(credential)
    }

    async fn credential_exists(&mut self, credential_key: &str) -> PgResult<bool> {
        use schema::api_credentials::dsl::*;

        let found = api_credentials
            .filter(key.eq(credential_key))
            .count()
            .get_result::<i64>(self)
            .await
            .map_err(PgError::from)?;

        Ok(found > 0)
    }
}
