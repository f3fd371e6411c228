//! Contract for the passwordless auth provider. The flow talks to whatever
//! implements this trait; the browser build wires in the Supabase client and
//! tests wire in a recording mock.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// What the provider returns once a code checks out. Provider responses vary
/// in which optional fields they carry, so absent ones deserialize to `None`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub phone_confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

/// Provider rejection with the human-readable text the UI surfaces verbatim.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sends and checks one-time passcodes. Futures are `?Send` because the
/// browser client's are.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Asks the provider to email a fresh code to `email`.
    async fn request_code(&self, email: &str) -> Result<(), AuthError>;

    /// Checks `code` against the one issued for `email`.
    async fn verify_code(&self, email: &str, code: &str) -> Result<Identity, AuthError>;
}
