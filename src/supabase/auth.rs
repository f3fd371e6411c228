//! Auth provider backed by Supabase's email one-time codes.

use super::{user_message, Endpoints, VerifyResponse};
use crate::app_lib::api::{post_json_with_headers, post_json_with_headers_response};
use crate::flow::{AuthError, AuthProvider, Identity};
use async_trait::async_trait;
use serde_json::json;

/// Client for the `auth/v1` endpoints. Stateless; config is read per request
/// so runtime overrides take effect without a reload.
#[derive(Clone, Copy, Debug, Default)]
pub struct SupabaseAuth;

#[async_trait(?Send)]
impl AuthProvider for SupabaseAuth {
    async fn request_code(&self, email: &str) -> Result<(), AuthError> {
        let endpoints = Endpoints::load().map_err(|err| AuthError::new(user_message(&err)))?;
        let body = json!({ "email": email, "create_user": true });

        post_json_with_headers(&endpoints.url("auth/v1/otp"), &body, &endpoints.headers())
            .await
            .map_err(|err| AuthError::new(user_message(&err)))
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<Identity, AuthError> {
        let endpoints = Endpoints::load().map_err(|err| AuthError::new(user_message(&err)))?;
        let body = json!({ "email": email, "token": code, "type": "email" });

        let response: VerifyResponse = post_json_with_headers_response(
            &endpoints.url("auth/v1/verify"),
            &body,
            &endpoints.headers(),
        )
        .await
        .map_err(|err| AuthError::new(user_message(&err)))?;

        Ok(response.user)
    }
}
