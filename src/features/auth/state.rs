//! Identity state and context for the frontend. Only non-sensitive profile
//! metadata is held, in memory for the lifetime of the tab; nothing here
//! persists an access token. Signing out also clears the verified-email
//! session marker so the donor flow starts fresh.

use crate::flow::{clear_verified_email, BrowserSessionStore, Identity};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Identity context shared through Leptos.
pub struct AuthContext {
    pub identity: RwSignal<Option<Identity>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(identity: RwSignal<Option<Identity>>) -> Self {
        let is_authenticated = Signal::derive(move || identity.get().is_some());
        Self {
            identity,
            is_authenticated,
        }
    }

    /// Stores the identity returned by a successful code verification.
    pub fn set_identity(&self, identity: Identity) {
        self.identity.set(Some(identity));
    }

    /// Drops the in-memory identity and the session's verified-email marker.
    pub fn sign_out(&self) {
        clear_verified_email(&BrowserSessionStore);
        self.identity.set(None);
    }
}

/// Provides the identity context to the component tree.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let identity = RwSignal::new(None);
    provide_context(AuthContext::new(identity));

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
