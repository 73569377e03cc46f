//! Phone number repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewPhoneNumber, PhoneNumber, UpdatePhoneNumber};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for phone number database operations.
pub trait PhoneNumberRepository {
    /// Creates a new phone number row.
    fn create_phone_number(
        &mut self,
        number: NewPhoneNumber,
    ) -> impl Future<Output = PgResult<PhoneNumber>> + Send;

    /// Finds a phone number by ID within one tenant.
    fn find_phone_number_by_id(
        &mut self,
        number_id: Uuid,
        tenant_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<PhoneNumber>>> + Send;

    /// Updates a phone number within one tenant.
    fn update_phone_number(
        &mut self,
        number_id: Uuid,
        tenant_id: Uuid,
        changes: UpdatePhoneNumber,
    ) -> impl Future<Output = PgResult<PhoneNumber>> + Send;

    /// Lists phone numbers of one tenant ordered by creation time.
    fn list_phone_numbers(
        &mut self,
        tenant_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<PhoneNumber>>> + Send;

    /// Counts phone numbers of one tenant.
    fn count_phone_numbers(&mut self, tenant_id: Uuid)
    -> impl Future<Output = PgResult<i64>> + Send;

    /// Deletes provider-backed numbers whose provider id is not in
    /// `upstream_ids`.
    ///
    /// Rows without a provider id are never touched. Returns the number of
    /// deleted rows.
    fn delete_phones_missing_from(
        &mut self,
        tenant_id: Uuid,
        upstream_ids: &[String],
    ) -> impl Future<Output = PgResult<u64>> + Send;
}

impl PhoneNumberRepository for PgConnection {
    async fn create_phone_number(&mut self, number: NewPhoneNumber) -> PgResult<PhoneNumber> {
        use schema::phone_numbers;

        let number = diesel::insert_into(phone_numbers::table)
            .values(&number)
            .returning(PhoneNumber::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(number)
    }

    async fn find_phone_number_by_id(
        &mut self,
        number_id: Uuid,
        owner_id: Uuid,
    ) -> PgResult<Option<PhoneNumber>> {
        use schema::phone_numbers::dsl::*;

        phone_numbers
            .filter(id.eq(number_id))
            .filter(tenant_id.eq(owner_id))
            .select(PhoneNumber::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_phone_number(
        &mut self,
        number_id: Uuid,
        owner_id: Uuid,
        changes: UpdatePhoneNumber,
    ) -> PgResult<PhoneNumber> {
        use schema::phone_numbers::dsl::*;

        let number = diesel::update(phone_numbers)
            .filter(id.eq(number_id))
            .filter(tenant_id.eq(owner_id))
            .set(&changes)
            .returning(PhoneNumber::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(number)
    }

    async fn list_phone_numbers(
        &mut self,
        owner_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<PhoneNumber>> {
        use schema::phone_numbers::dsl::*;

        phone_numbers
            .filter(tenant_id.eq(owner_id))
            .select(PhoneNumber::as_select())
            .order(created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_phone_numbers(&mut self, owner_id: Uuid) -> PgResult<i64> {
        use schema::phone_numbers::dsl::*;

        phone_numbers
            .filter(tenant_id.eq(owner_id))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_phones_missing_from(
        &mut self,
        owner_id: Uuid,
        upstream_ids: &[String],
    ) -> PgResult<u64> {
        use schema::phone_numbers::dsl::*;

        let deleted = diesel::delete(phone_numbers)
            .filter(tenant_id.eq(owner_id))
            .filter(bolna_phone_id.is_not_null())
            .filter(bolna_phone_id.assume_not_null().ne_all(upstream_ids))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted as u64)
    }
}
