//! Session-scoped storage behind a trait so the flow core never touches
//! `web_sys`. The browser store wraps `window.sessionStorage`; tests use the
//! in-memory store. Two keys mirror the verified state across a reload:
//! `emailVerified` (`"true"` when set) and `verifiedEmail`.

use std::cell::RefCell;
use std::collections::HashMap;

pub const EMAIL_VERIFIED_KEY: &str = "emailVerified";
pub const VERIFIED_EMAIL_KEY: &str = "verifiedEmail";

/// Minimal key-value view of session storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Returns the verified address when both keys are present and the flag is
/// exactly `"true"`; a partial write restores nothing.
pub fn load_verified_email(store: &impl SessionStore) -> Option<String> {
    if store.get(EMAIL_VERIFIED_KEY).as_deref() != Some("true") {
        return None;
    }
    store.get(VERIFIED_EMAIL_KEY)
}

pub fn save_verified_email(store: &impl SessionStore, email: &str) {
    store.set(EMAIL_VERIFIED_KEY, "true");
    store.set(VERIFIED_EMAIL_KEY, email);
}

pub fn clear_verified_email(store: &impl SessionStore) {
    store.remove(EMAIL_VERIFIED_KEY);
    store.remove(VERIFIED_EMAIL_KEY);
}

/// In-memory store for tests and native builds.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `sessionStorage`-backed store. Storage failures (disabled storage,
/// private-mode quirks) degrade to "nothing stored".
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.session_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        clear_verified_email, load_verified_email, save_verified_email, MemorySessionStore,
        SessionStore, EMAIL_VERIFIED_KEY, VERIFIED_EMAIL_KEY,
    };

    #[test]
    fn save_then_load_round_trips() {
        let store = MemorySessionStore::default();
        save_verified_email(&store, "donor@example.com");

        assert_eq!(store.get(EMAIL_VERIFIED_KEY).as_deref(), Some("true"));
        assert_eq!(
            store.get(VERIFIED_EMAIL_KEY).as_deref(),
            Some("donor@example.com")
        );
        assert_eq!(
            load_verified_email(&store).as_deref(),
            Some("donor@example.com")
        );
    }

    #[test]
    fn load_requires_both_keys() {
        let store = MemorySessionStore::default();
        store.set(EMAIL_VERIFIED_KEY, "true");
        assert_eq!(load_verified_email(&store), None);

        let store = MemorySessionStore::default();
        store.set(VERIFIED_EMAIL_KEY, "donor@example.com");
        assert_eq!(load_verified_email(&store), None);
    }

    #[test]
    fn load_rejects_non_true_flag() {
        let store = MemorySessionStore::default();
        store.set(EMAIL_VERIFIED_KEY, "yes");
        store.set(VERIFIED_EMAIL_KEY, "donor@example.com");
        assert_eq!(load_verified_email(&store), None);
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemorySessionStore::default();
        save_verified_email(&store, "donor@example.com");
        clear_verified_email(&store);

        assert_eq!(store.get(EMAIL_VERIFIED_KEY), None);
        assert_eq!(store.get(VERIFIED_EMAIL_KEY), None);
        assert_eq!(load_verified_email(&store), None);
    }
}
