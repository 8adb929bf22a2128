//! The signed-in session: tokens and the current user.
//!
//! `Session` is the single owner of credential state. The API client, the
//! navigation gate and the route guard all receive a clone of the same
//! handle; persisted storage is touched only through these methods.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared_types::{TokenPair, User, UserRole};

use crate::token_store::{TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

#[derive(Default)]
struct SessionState {
    access: Option<String>,
    refresh: Option<String>,
    user: Option<User>,
}

struct SessionInner {
    store: Arc<dyn TokenStore + Send + Sync>,
    state: RwLock<SessionState>,
}

/// Credentials that were held when a session ended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndedSession {
    pub access: Option<String>,
    pub refresh: Option<String>,
}

#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("Session")
            .field("has_access", &state.access.is_some())
            .field("has_refresh", &state.refresh.is_some())
            .field("user", &state.user.as_ref().map(|u| u.username.as_str()))
            .finish()
    }
}

impl Session {
    /// A session backed by `store`. Nothing is read until [`Session::restore`].
    pub fn new(store: Arc<dyn TokenStore + Send + Sync>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                store,
                state: RwLock::new(SessionState::default()),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Load persisted tokens into memory and return the access token.
    pub fn restore(&self) -> Option<String> {
        let access = self.inner.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty());
        let refresh = self.inner.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty());
        let mut state = self.write();
        if state.access != access {
            state.user = None;
        }
        state.access = access.clone();
        state.refresh = refresh;
        access
    }

    pub fn access_token(&self) -> Option<String> {
        self.read().access.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read().refresh.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().access.is_some()
    }

    /// Whether storage holds an access token. In-memory state is untouched.
    pub fn has_persisted_token(&self) -> bool {
        self.inner
            .store
            .get(ACCESS_TOKEN_KEY)
            .is_some_and(|t| !t.is_empty())
    }

    /// Start a session from a fresh login: persist both tokens.
    pub fn begin(&self, tokens: &TokenPair) {
        self.inner.store.set(ACCESS_TOKEN_KEY, &tokens.access);
        self.inner.store.set(REFRESH_TOKEN_KEY, &tokens.refresh);
        let mut state = self.write();
        state.access = Some(tokens.access.clone());
        state.refresh = Some(tokens.refresh.clone());
        state.user = None;
        tracing::debug!("session started");
    }

    /// Swap in a refreshed access token (and a rotated refresh token, if any).
    pub fn replace_tokens(&self, access: &str, refresh: Option<&str>) {
        self.inner.store.set(ACCESS_TOKEN_KEY, access);
        if let Some(refresh) = refresh {
            self.inner.store.set(REFRESH_TOKEN_KEY, refresh);
        }
        let mut state = self.write();
        state.access = Some(access.to_string());
        if let Some(refresh) = refresh {
            state.refresh = Some(refresh.to_string());
        }
    }

    pub fn set_user(&self, user: User) {
        self.write().user = Some(user);
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.read().user.as_ref().and_then(User::role)
    }

    /// Drop in-memory credentials after the backend rejected them.
    /// Persisted tokens are left alone.
    pub fn invalidate(&self) {
        let mut state = self.write();
        state.access = None;
        state.refresh = None;
        state.user = None;
        tracing::debug!("session invalidated");
    }

    /// End the session: clear persisted and in-memory state. Returns the
    /// tokens that were held, for server-side revocation.
    pub fn end(&self) -> EndedSession {
        let persisted_access = self.inner.store.get(ACCESS_TOKEN_KEY);
        let persisted_refresh = self.inner.store.get(REFRESH_TOKEN_KEY);
        self.inner.store.remove(ACCESS_TOKEN_KEY);
        self.inner.store.remove(REFRESH_TOKEN_KEY);

        let mut state = self.write();
        let access = state.access.take().or(persisted_access);
        let refresh = state.refresh.take().or(persisted_refresh);
        state.user = None;
        tracing::debug!("session ended");
        EndedSession {
            access: access.filter(|t| !t.is_empty()),
            refresh: refresh.filter(|t| !t.is_empty()),
        }
    }
}
