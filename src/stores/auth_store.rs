// ============================================================================
// AUTH STORE - Persisted session snapshot + auth signals
// ============================================================================
// Sole owner of the stored session. Written only by the refresh procedure
// and the session context; services never touch it.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::SessionSnapshot;
use crate::state::reactivity::{Listeners, SubscriptionId};
use crate::utils::storage::{
    default_storage, load_from_storage, remove_from_storage, save_to_storage, KeyValueStorage,
};
use crate::utils::STORAGE_KEY_SESSION;

/// Signals broadcast by the store. Listeners re-read the store on receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthEvent {
    TokensUpdated,
    SignedOut,
}

impl AuthEvent {
    pub fn name(self) -> &'static str {
        match self {
            AuthEvent::TokensUpdated => "tokens-updated",
            AuthEvent::SignedOut => "signed-out",
        }
    }
}

impl fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct AuthStoreInner {
    storage: Rc<dyn KeyValueStorage>,
    key: String,
    listeners: Listeners<AuthEvent>,
}

/// Cheap to clone; clones share storage and listeners.
#[derive(Clone)]
pub struct AuthStore {
    inner: Rc<AuthStoreInner>,
}

impl AuthStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(AuthStoreInner {
                storage,
                key: key.into(),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Store on the given backend under the default key
    pub fn with_storage(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self::new(storage, STORAGE_KEY_SESSION)
    }

    /// Store on the platform storage under the configured key
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(default_storage(), config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// Current snapshot; missing or corrupt content reads as `None`
    pub fn get(&self) -> Option<SessionSnapshot> {
        load_from_storage(self.inner.storage.as_ref(), &self.inner.key)
    }

    /// Overwrite the stored snapshot
    pub fn set(&self, snapshot: &SessionSnapshot) {
        if let Err(e) = save_to_storage(self.inner.storage.as_ref(), &self.inner.key, snapshot) {
            log::error!("❌ Error saving session: {}", e);
        }
    }

    /// Remove the stored snapshot. Clearing an empty store is fine.
    pub fn clear(&self) {
        if let Err(e) = remove_from_storage(self.inner.storage.as_ref(), &self.inner.key) {
            log::error!("❌ Error clearing session: {}", e);
        }
    }

    pub fn emit(&self, event: AuthEvent) {
        log::debug!("📣 Auth event: {}", event);
        self.inner.listeners.notify(&event);
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AuthEvent) + 'static,
    {
        self.inner.listeners.subscribe(move |event| callback(*event))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{SessionTokens, SessionUser};
    use crate::utils::storage::MemoryStorage;
    use std::cell::RefCell;

    pub(crate) fn snapshot(access: &str, refresh: &str) -> SessionSnapshot {
        SessionSnapshot {
            user: SessionUser {
                id: "u-1".into(),
                company_slug: "acme".into(),
                role_id: "hr-admin".into(),
                full_name: "Ada Lovelace".into(),
                email: "ada@acme.test".into(),
                permissions: vec!["employees.read".into(), "payroll.run".into()],
            },
            tokens: SessionTokens {
                access_token: access.into(),
                refresh_token: refresh.into(),
                token_type: "Bearer".into(),
                expires_in: 900,
            },
        }
    }

    fn memory_store() -> (AuthStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        (AuthStore::with_storage(Rc::new(storage.clone())), storage)
    }

    #[test]
    fn set_then_get_roundtrips() {
        let (store, _) = memory_store();
        let session = snapshot("A", "R");

        store.set(&session);
        assert_eq!(store.get(), Some(session));
    }

    #[test]
    fn set_overwrites_without_merging() {
        let (store, _) = memory_store();
        store.set(&snapshot("A", "R"));

        let mut replacement = snapshot("B", "R2");
        replacement.user.permissions.clear();
        store.set(&replacement);

        assert_eq!(store.get(), Some(replacement));
    }

    #[test]
    fn corrupt_content_reads_as_signed_out() {
        let (store, storage) = memory_store();
        storage.set_item(STORAGE_KEY_SESSION, r#"{"user":42}"#).unwrap();

        assert_eq!(store.get(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let (store, storage) = memory_store();
        store.set(&snapshot("A", "R"));

        store.clear();
        store.clear();

        assert_eq!(store.get(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn emit_reaches_every_listener() {
        let (store, _) = memory_store();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = seen.clone();
        let first = store.subscribe(move |e| s.borrow_mut().push(e.name()));
        let s = seen.clone();
        store.subscribe(move |e| s.borrow_mut().push(e.name()));

        store.emit(AuthEvent::TokensUpdated);
        store.unsubscribe(first);
        store.emit(AuthEvent::SignedOut);

        assert_eq!(*seen.borrow(), vec!["tokens-updated", "tokens-updated", "signed-out"]);
    }

    #[test]
    fn clones_share_listeners() {
        let (store, _) = memory_store();
        let clone = store.clone();
        clone.subscribe(|_| {});
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn without_storage_everything_is_absent() {
        let store = AuthStore::with_storage(Rc::new(crate::utils::storage::NoStorage));
        store.set(&snapshot("A", "R"));
        assert_eq!(store.get(), None);
        store.clear();
    }
}
