// ============================================================================
// SESSION CONTEXT - Reactive auth state for the UI
// ============================================================================
// Caches the stored session and follows `tokens-updated` / `signed-out`.
// Never owns storage: writes go through the auth store.
// ============================================================================

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::error::ApiResult;
use crate::models::{LoginRequest, RegisterRequest, SessionSnapshot, SessionUser};
use crate::services::AuthService;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::stores::{AuthEvent, AuthStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<SessionSnapshot>,
    pub initialized: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session
            .as_ref()
            .and_then(SessionSnapshot::access_token)
            .is_some()
    }
}

struct ContextInner {
    store: AuthStore,
    auth: AuthService,
    state: ReactiveState<SessionState>,
    store_subscription: Cell<Option<SubscriptionId>>,
}

impl ContextInner {
    fn set_session(&self, session: Option<SessionSnapshot>) {
        if self.state.get().session == session {
            return;
        }
        self.state.update(|state| state.session = session);
    }

    fn on_auth_event(&self, event: AuthEvent) {
        match event {
            AuthEvent::TokensUpdated => self.set_session(self.store.get()),
            AuthEvent::SignedOut => self.set_session(None),
        }
    }
}

impl Drop for ContextInner {
    fn drop(&mut self) {
        if let Some(id) = self.store_subscription.take() {
            self.store.unsubscribe(id);
        }
    }
}

/// Shared handle; the store subscription lives until the last clone is dropped.
#[derive(Clone)]
pub struct SessionContext {
    inner: Rc<ContextInner>,
}

impl SessionContext {
    pub fn new(store: AuthStore, auth: AuthService) -> Self {
        let session = store.get();
        let inner = Rc::new(ContextInner {
            store: store.clone(),
            auth,
            state: ReactiveState::new(SessionState { session, initialized: true }),
            store_subscription: Cell::new(None),
        });

        let weak: Weak<ContextInner> = Rc::downgrade(&inner);
        let id = store.subscribe(move |event| {
            if let Some(inner) = weak.upgrade() {
                inner.on_auth_event(event);
            }
        });
        inner.store_subscription.set(Some(id));

        log::info!(
            "🔄 Session context ready ({})",
            if inner.state.get().is_authenticated() { "signed in" } else { "signed out" }
        );
        Self { inner }
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.get().clone()
    }

    pub fn session(&self) -> Option<SessionSnapshot> {
        self.inner.state.get().session.clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.inner.state.get().session.as_ref().map(|s| s.user.clone())
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.state.get().initialized
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.get().is_authenticated()
    }

    pub fn permissions(&self) -> Vec<String> {
        self.inner
            .state
            .get()
            .session
            .as_ref()
            .map(|s| s.user.permissions.clone())
            .unwrap_or_default()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.inner
            .state
            .get()
            .session
            .as_ref()
            .map(|s| s.has_permission(permission))
            .unwrap_or(false)
    }

    /// Called after every change of the local state
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.inner.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.state.unsubscribe(id)
    }

    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<SessionSnapshot> {
        let session = self.inner.auth.login(credentials).await?;
        self.adopt(&session);
        log::info!("✅ Signed in as {}", session.user.email);
        Ok(session)
    }

    pub async fn register(&self, details: &RegisterRequest) -> ApiResult<SessionSnapshot> {
        let session = self.inner.auth.register(details).await?;
        self.adopt(&session);
        log::info!("✅ Registered {} as {}", details.company_name, session.user.email);
        Ok(session)
    }

    /// Local sign-out always succeeds; the server call is best-effort
    pub async fn logout(&self) {
        let refresh_token = self
            .inner
            .store
            .get()
            .and_then(|s| s.refresh_token().map(str::to_string));

        if let Err(e) = self.inner.auth.logout(refresh_token).await {
            log::warn!("⚠️ Server logout failed, signing out locally: {}", e);
        }

        self.inner.store.clear();
        self.inner.set_session(None);
        self.inner.store.emit(AuthEvent::SignedOut);
        log::info!("👋 Logout");
    }

    // Store first, then local state without waiting for a signal
    fn adopt(&self, session: &SessionSnapshot) {
        self.inner.store.set(session);
        self.inner.set_session(Some(session.clone()));
    }
}
