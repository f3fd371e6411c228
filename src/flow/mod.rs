//! OTP email-verification flow.
//!
//! One value object owns the whole gate: `Idle → CodeSent → Verified →
//! Completed`, with a back-edge to `Idle` via "change email" and a reset
//! edge from `Completed`. The machine holds the captured email, the code as
//! last entered, and the latest status notice; collaborators (the auth
//! provider and session storage) are passed into each operation, so the core
//! has no browser types in it.
//!
//! Provider failures never advance the state. They land in the notice for
//! display and the user retries; nothing here panics or retries on its own.

mod provider;
mod session;

pub use provider::{AuthError, AuthProvider, Identity};
pub use session::{
    clear_verified_email, load_verified_email, save_verified_email, MemorySessionStore,
    SessionStore, EMAIL_VERIFIED_KEY, VERIFIED_EMAIL_KEY,
};

#[cfg(target_arch = "wasm32")]
pub use session::BrowserSessionStore;

use crate::validate;
use thiserror::Error;

const MSG_EMAIL_REQUIRED: &str = "Please enter your email address.";
const MSG_EMAIL_INVALID: &str = "Please enter a valid email address.";
const MSG_OTP_REQUIRED: &str = "Please enter the OTP.";
const MSG_OTP_SENT: &str = "OTP sent successfully! Check your email.";
const MSG_OTP_RESENT: &str = "OTP resent successfully!";
const MSG_EMAIL_VERIFIED: &str = "Email verified successfully!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    CodeSent,
    Verified,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Status line shown under the active form, overwritten on every attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FlowError {
    /// Client-side validation failure; the provider was never called.
    #[error("{0}")]
    Input(String),
    /// The provider rejected the call; state is unchanged.
    #[error(transparent)]
    Provider(#[from] AuthError),
    /// A code was requested after verification already succeeded.
    #[error("email is already verified")]
    AlreadyVerified,
    /// A verify was attempted with no code outstanding.
    #[error("no verification code has been requested")]
    NotAwaitingCode,
}

/// The verification session. Construct with [`VerificationFlow::new`] or
/// [`VerificationFlow::restore_from_session`]; mutate only through the
/// operations below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerificationFlow {
    state: FlowState,
    email: String,
    code: String,
    last_message: Option<Notice>,
}

impl VerificationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trust-on-read restore: if a previous verification in this browser
    /// session left both storage keys behind, start at `Verified` with the
    /// stored address and no provider round-trip. Otherwise start at `Idle`.
    pub fn restore_from_session(store: &impl SessionStore) -> Self {
        match session::load_verified_email(store) {
            Some(email) => Self {
                state: FlowState::Verified,
                email,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The address the flow is operating on: captured by `request_code`,
    /// kept across "change email" so the field stays pre-filled.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The code as last entered; preserved across a failed verify so the
    /// user can edit instead of retyping.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn last_message(&self) -> Option<&Notice> {
        self.last_message.as_ref()
    }

    /// Asks the provider to send a code to `email` and captures the address
    /// on success. From `CodeSent` this is a resend (or a switch to a new
    /// address); the provider is always re-invoked, never a cached code.
    pub async fn request_code(
        &mut self,
        provider: &impl AuthProvider,
        email: &str,
    ) -> Result<(), FlowError> {
        if matches!(self.state, FlowState::Verified | FlowState::Completed) {
            return Err(FlowError::AlreadyVerified);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(self.input_error(MSG_EMAIL_REQUIRED));
        }
        if !validate::is_valid_email(email) {
            return Err(self.input_error(MSG_EMAIL_INVALID));
        }

        let resend = self.state == FlowState::CodeSent;
        match provider.request_code(email).await {
            Ok(()) => {
                self.email = email.to_string();
                self.state = FlowState::CodeSent;
                self.last_message = Some(Notice::success(if resend {
                    MSG_OTP_RESENT
                } else {
                    MSG_OTP_SENT
                }));
                Ok(())
            }
            Err(err) => {
                self.last_message = Some(Notice::error(err.message.clone()));
                Err(FlowError::Provider(err))
            }
        }
    }

    /// Checks `code` against the captured address. Success moves to
    /// `Verified`, mirrors the result into session storage, and clears the
    /// code; failure keeps the entered code for editing.
    pub async fn verify_code(
        &mut self,
        provider: &impl AuthProvider,
        store: &impl SessionStore,
        code: &str,
    ) -> Result<Identity, FlowError> {
        if self.state != FlowState::CodeSent {
            return Err(FlowError::NotAwaitingCode);
        }
        if code.trim().is_empty() {
            return Err(self.input_error(MSG_OTP_REQUIRED));
        }

        self.code = code.to_string();
        match provider.verify_code(&self.email, code).await {
            Ok(identity) => {
                self.state = FlowState::Verified;
                self.code.clear();
                self.last_message = Some(Notice::success(MSG_EMAIL_VERIFIED));
                session::save_verified_email(store, &self.email);
                Ok(identity)
            }
            Err(err) => {
                self.last_message = Some(Notice::error(err.message.clone()));
                Err(FlowError::Provider(err))
            }
        }
    }

    /// Back to the email form. Keeps the address pre-filled; drops the code
    /// and the notice. No-op outside `CodeSent`.
    pub fn change_email(&mut self) {
        if self.state != FlowState::CodeSent {
            return;
        }
        self.state = FlowState::Idle;
        self.code.clear();
        self.last_message = None;
    }

    /// Called when the gated action (donor registration) succeeds: the
    /// session keys are cleared and the flow parks in `Completed` for the
    /// success screen.
    pub fn complete(&mut self, store: &impl SessionStore) {
        session::clear_verified_email(store);
        self.state = FlowState::Completed;
        self.code.clear();
        self.last_message = None;
    }

    /// Full reset: clears the session keys and every field, returning to
    /// `Idle` for a fresh verification cycle.
    pub fn complete_and_reset(&mut self, store: &impl SessionStore) {
        session::clear_verified_email(store);
        *self = Self::default();
    }

    fn input_error(&mut self, message: &str) -> FlowError {
        self.last_message = Some(Notice::error(message));
        FlowError::Input(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Recording provider: every call is logged, outcomes are scripted.
    #[derive(Clone, Debug, Default)]
    struct MockAuth {
        accepted_code: Option<String>,
        request_error: Option<String>,
        requests: Arc<Mutex<Vec<String>>>,
        verifications: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl MockAuth {
        fn accepting(code: &str) -> Self {
            Self {
                accepted_code: Some(code.to_string()),
                ..Self::default()
            }
        }

        fn failing_requests(message: &str) -> Self {
            Self {
                request_error: Some(message.to_string()),
                ..Self::default()
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn verifications(&self) -> Vec<(String, String)> {
            self.verifications.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl AuthProvider for MockAuth {
        async fn request_code(&self, email: &str) -> Result<(), AuthError> {
            self.requests.lock().unwrap().push(email.to_string());
            match &self.request_error {
                Some(message) => Err(AuthError::new(message.clone())),
                None => Ok(()),
            }
        }

        async fn verify_code(&self, email: &str, code: &str) -> Result<Identity, AuthError> {
            self.verifications
                .lock()
                .unwrap()
                .push((email.to_string(), code.to_string()));
            match &self.accepted_code {
                Some(expected) if code != expected => Err(AuthError::new("invalid code")),
                _ => Ok(Identity {
                    id: "user-1".to_string(),
                    email: email.to_string(),
                    ..Identity::default()
                }),
            }
        }
    }

    fn error_text(flow: &VerificationFlow) -> &str {
        let notice = flow.last_message().expect("notice set");
        assert_eq!(notice.kind, NoticeKind::Error);
        &notice.text
    }

    #[tokio::test]
    async fn malformed_emails_never_reach_the_provider() {
        let provider = MockAuth::default();
        let mut flow = VerificationFlow::new();

        for email in ["plainaddress", "user@", "user@host", "@example.com"] {
            let err = flow.request_code(&provider, email).await.unwrap_err();
            assert!(matches!(err, FlowError::Input(_)), "{email}: {err:?}");
            assert_eq!(flow.state(), FlowState::Idle);
            assert_eq!(error_text(&flow), MSG_EMAIL_INVALID);
        }

        let err = flow.request_code(&provider, "  ").await.unwrap_err();
        assert!(matches!(err, FlowError::Input(_)));
        assert_eq!(error_text(&flow), MSG_EMAIL_REQUIRED);

        assert!(provider.requests().is_empty());
    }

    #[tokio::test]
    async fn successful_request_enters_code_sent_with_notice() {
        let provider = MockAuth::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();

        assert_eq!(flow.state(), FlowState::CodeSent);
        assert_eq!(flow.email(), "donor@example.com");
        let notice = flow.last_message().expect("notice set");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(!notice.text.is_empty());
        assert_eq!(provider.requests(), vec!["donor@example.com".to_string()]);
    }

    #[tokio::test]
    async fn failed_request_stays_idle_and_surfaces_provider_text() {
        let provider = MockAuth::failing_requests("rate limit exceeded");
        let mut flow = VerificationFlow::new();

        let err = flow
            .request_code(&provider, "donor@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Provider(_)));
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(error_text(&flow), "rate limit exceeded");
    }

    #[tokio::test]
    async fn resend_reinvokes_the_provider_every_time() {
        let provider = MockAuth::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();
        flow.request_code(&provider, "donor@example.com").await.unwrap();

        assert_eq!(flow.state(), FlowState::CodeSent);
        assert_eq!(provider.requests().len(), 2);
        assert_eq!(
            flow.last_message().map(|n| n.text.as_str()),
            Some(MSG_OTP_RESENT)
        );
    }

    #[tokio::test]
    async fn requesting_with_a_new_address_recaptures_it() {
        let provider = MockAuth::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "first@example.com").await.unwrap();
        flow.request_code(&provider, "second@example.com").await.unwrap();

        assert_eq!(flow.email(), "second@example.com");
        assert_eq!(
            provider.requests(),
            vec!["first@example.com".to_string(), "second@example.com".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_verify_keeps_state_and_entered_code() {
        let provider = MockAuth::accepting("123456");
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();
        let err = flow
            .verify_code(&provider, &store, "000000")
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Provider(_)));
        assert_eq!(flow.state(), FlowState::CodeSent);
        assert_eq!(flow.code(), "000000");
        assert_eq!(error_text(&flow), "invalid code");
        assert_eq!(load_verified_email(&store), None);
    }

    #[tokio::test]
    async fn successful_verify_persists_the_session_marker() {
        let provider = MockAuth::default();
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();
        let identity = flow
            .verify_code(&provider, &store, "123456")
            .await
            .unwrap();

        assert_eq!(identity.email, "donor@example.com");
        assert_eq!(flow.state(), FlowState::Verified);
        assert_eq!(flow.code(), "");
        assert_eq!(store.get(EMAIL_VERIFIED_KEY).as_deref(), Some("true"));
        assert_eq!(
            store.get(VERIFIED_EMAIL_KEY).as_deref(),
            Some("donor@example.com")
        );

        let restored = VerificationFlow::restore_from_session(&store);
        assert_eq!(restored.state(), FlowState::Verified);
        assert_eq!(restored.email(), "donor@example.com");
    }

    #[tokio::test]
    async fn verify_uses_the_captured_address() {
        let provider = MockAuth::default();
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();
        flow.verify_code(&provider, &store, "123456").await.unwrap();

        assert_eq!(
            provider.verifications(),
            vec![("donor@example.com".to_string(), "123456".to_string())]
        );
    }

    #[tokio::test]
    async fn change_email_always_returns_to_idle() {
        let provider = MockAuth::accepting("123456");
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();
        let _ = flow.verify_code(&provider, &store, "999999").await;

        flow.change_email();

        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.email(), "donor@example.com");
        assert_eq!(flow.code(), "");
        assert_eq!(flow.last_message(), None);
    }

    #[tokio::test]
    async fn change_email_outside_code_sent_is_a_no_op() {
        let mut flow = VerificationFlow::new();
        flow.change_email();
        assert_eq!(flow.state(), FlowState::Idle);

        let store = MemorySessionStore::default();
        save_verified_email(&store, "donor@example.com");
        let mut flow = VerificationFlow::restore_from_session(&store);
        flow.change_email();
        assert_eq!(flow.state(), FlowState::Verified);
    }

    #[tokio::test]
    async fn empty_code_is_rejected_before_the_provider() {
        let provider = MockAuth::default();
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();
        let err = flow.verify_code(&provider, &store, "  ").await.unwrap_err();

        assert!(matches!(err, FlowError::Input(_)));
        assert_eq!(flow.state(), FlowState::CodeSent);
        assert_eq!(error_text(&flow), MSG_OTP_REQUIRED);
        assert!(provider.verifications().is_empty());
    }

    #[tokio::test]
    async fn verify_without_an_outstanding_code_is_rejected() {
        let provider = MockAuth::default();
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        let err = flow
            .verify_code(&provider, &store, "123456")
            .await
            .unwrap_err();

        assert_eq!(err, FlowError::NotAwaitingCode);
        assert!(provider.verifications().is_empty());
    }

    #[tokio::test]
    async fn requesting_after_verification_is_rejected() {
        let provider = MockAuth::default();
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();
        flow.verify_code(&provider, &store, "123456").await.unwrap();

        let err = flow
            .request_code(&provider, "other@example.com")
            .await
            .unwrap_err();

        assert_eq!(err, FlowError::AlreadyVerified);
        assert_eq!(provider.requests().len(), 1);
        assert_eq!(flow.state(), FlowState::Verified);
    }

    #[tokio::test]
    async fn complete_parks_in_completed_and_clears_storage() {
        let provider = MockAuth::default();
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();
        flow.verify_code(&provider, &store, "123456").await.unwrap();
        flow.complete(&store);

        assert_eq!(flow.state(), FlowState::Completed);
        assert_eq!(store.get(EMAIL_VERIFIED_KEY), None);
        assert_eq!(store.get(VERIFIED_EMAIL_KEY), None);
    }

    #[tokio::test]
    async fn complete_and_reset_returns_to_a_fresh_idle() {
        let provider = MockAuth::default();
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "donor@example.com").await.unwrap();
        flow.verify_code(&provider, &store, "123456").await.unwrap();
        flow.complete_and_reset(&store);

        assert_eq!(flow, VerificationFlow::new());
        assert_eq!(store.get(EMAIL_VERIFIED_KEY), None);
        assert_eq!(store.get(VERIFIED_EMAIL_KEY), None);
        assert_eq!(
            VerificationFlow::restore_from_session(&store).state(),
            FlowState::Idle
        );
    }

    #[tokio::test]
    async fn wrong_then_right_code_end_to_end() {
        let provider = MockAuth::accepting("123456");
        let store = MemorySessionStore::default();
        let mut flow = VerificationFlow::new();

        flow.request_code(&provider, "a@b.com").await.unwrap();
        assert_eq!(flow.state(), FlowState::CodeSent);

        let err = flow
            .verify_code(&provider, &store, "000000")
            .await
            .unwrap_err();
        assert_eq!(err, FlowError::Provider(AuthError::new("invalid code")));
        assert_eq!(flow.state(), FlowState::CodeSent);
        assert_eq!(flow.code(), "000000");

        flow.verify_code(&provider, &store, "123456").await.unwrap();
        assert_eq!(flow.state(), FlowState::Verified);
        assert_eq!(store.get(EMAIL_VERIFIED_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(VERIFIED_EMAIL_KEY).as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn restore_skips_the_provider_entirely() {
        let store = MemorySessionStore::default();
        store.set(EMAIL_VERIFIED_KEY, "true");
        store.set(VERIFIED_EMAIL_KEY, "x@y.com");

        let flow = VerificationFlow::restore_from_session(&store);

        assert_eq!(flow.state(), FlowState::Verified);
        assert_eq!(flow.email(), "x@y.com");
        // restore_from_session takes no provider; nothing to call.
    }

    #[tokio::test]
    async fn restore_with_partial_storage_starts_idle() {
        let store = MemorySessionStore::default();
        store.set(EMAIL_VERIFIED_KEY, "true");
        assert_eq!(
            VerificationFlow::restore_from_session(&store).state(),
            FlowState::Idle
        );

        let store = MemorySessionStore::default();
        store.set(VERIFIED_EMAIL_KEY, "x@y.com");
        assert_eq!(
            VerificationFlow::restore_from_session(&store).state(),
            FlowState::Idle
        );
    }
}
