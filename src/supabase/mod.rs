//! Supabase clients for the auth and directory back ends.
//!
//! Both clients talk to the project's public REST surface with the anon key:
//! GoTrue (`auth/v1`) for email one-time codes and PostgREST (`rest/v1`) for
//! the `Donor` table. Row mapping lives in [`types`] and is shared with the
//! native test suite; the HTTP clients themselves only exist on wasm.

mod types;

#[cfg(target_arch = "wasm32")]
mod auth;
#[cfg(target_arch = "wasm32")]
mod directory;

pub use types::{DonorRow, InsertDonorRow, VerifyResponse};

#[cfg(target_arch = "wasm32")]
pub use auth::SupabaseAuth;
#[cfg(target_arch = "wasm32")]
pub use directory::SupabaseDirectory;

use crate::app_lib::{config::AppConfig, AppError};

/// Resolved Supabase endpoints plus the headers every request carries.
#[derive(Debug)]
pub struct Endpoints {
    base_url: String,
    anon_key: String,
}

impl Endpoints {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn load() -> Result<Self, AppError> {
        Self::from_config(&AppConfig::load())
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let base_url = config.supabase_url.trim();
        let anon_key = config.supabase_anon_key.trim();

        if base_url.is_empty() || anon_key.is_empty() {
            return Err(AppError::Config(
                "Supabase is not configured. Set DONORLINK_SUPABASE_URL and \
                 DONORLINK_SUPABASE_ANON_KEY."
                    .to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Joins the base URL and a path without doubling slashes.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Headers for anonymous access: the `apikey` header plus a bearer token,
    /// both carrying the public anon key.
    pub fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("apikey".to_string(), self.anon_key.clone()),
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.anon_key),
            ),
        ]
    }
}

/// Strips the `AppError` display prefix so notices show the service's own
/// message, matching what the error body carried.
#[cfg(target_arch = "wasm32")]
pub(crate) fn user_message(err: &AppError) -> String {
    match err {
        AppError::Http { message, .. } => message.clone(),
        AppError::Config(message)
        | AppError::Network(message)
        | AppError::Timeout(message)
        | AppError::Parse(message)
        | AppError::Serialization(message) => message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, AppError, Endpoints};

    fn config(url: &str, key: &str) -> AppConfig {
        AppConfig {
            supabase_url: url.to_string(),
            supabase_anon_key: key.to_string(),
        }
    }

    #[test]
    fn blank_config_is_rejected() {
        let err = Endpoints::from_config(&config("", "anon")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = Endpoints::from_config(&config("https://demo.supabase.co", "  ")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn urls_join_without_doubled_slashes() {
        let endpoints = Endpoints::from_config(&config("https://demo.supabase.co/", "anon"))
            .expect("config is complete");

        assert_eq!(
            endpoints.url("/auth/v1/otp"),
            "https://demo.supabase.co/auth/v1/otp"
        );
        assert_eq!(
            endpoints.url("rest/v1/Donor?select=*"),
            "https://demo.supabase.co/rest/v1/Donor?select=*"
        );
    }

    #[test]
    fn headers_carry_the_anon_key_twice() {
        let endpoints = Endpoints::from_config(&config("https://demo.supabase.co", "anon-key"))
            .expect("config is complete");

        let headers = endpoints.headers();
        assert_eq!(headers[0], ("apikey".to_string(), "anon-key".to_string()));
        assert_eq!(
            headers[1],
            ("Authorization".to_string(), "Bearer anon-key".to_string())
        );
    }
}
