//! Directory store backed by the `Donor` table through PostgREST.

use super::{user_message, DonorRow, Endpoints, InsertDonorRow};
use crate::app_lib::api::{get_json_with_headers, post_json_with_headers};
use crate::donors::{DirectoryStore, DonorRecord, NewDonor, StoreError};
use async_trait::async_trait;

/// Client for the `rest/v1/Donor` endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct SupabaseDirectory;

#[async_trait(?Send)]
impl DirectoryStore for SupabaseDirectory {
    async fn list(&self) -> Result<Vec<DonorRecord>, StoreError> {
        let endpoints = Endpoints::load().map_err(|err| StoreError::new(user_message(&err)))?;

        let rows: Vec<DonorRow> = get_json_with_headers(
            &endpoints.url("rest/v1/Donor?select=*&order=created_at.desc"),
            &endpoints.headers(),
        )
        .await
        .map_err(|err| StoreError::new(user_message(&err)))?;

        Ok(rows.into_iter().map(DonorRecord::from).collect())
    }

    async fn insert(&self, donor: &NewDonor) -> Result<(), StoreError> {
        let endpoints = Endpoints::load().map_err(|err| StoreError::new(user_message(&err)))?;
        let mut headers = endpoints.headers();
        headers.push(("Prefer".to_string(), "return=minimal".to_string()));

        // PostgREST bulk-insert shape; a single row still travels as an array.
        let payload = [InsertDonorRow::from(donor)];

        post_json_with_headers(&endpoints.url("rest/v1/Donor"), &payload, &headers)
            .await
            .map_err(|err| StoreError::new(user_message(&err)))
    }
}
