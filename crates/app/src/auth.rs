use client::{ApiClient, NavState, NavigationGate, Session};
use dioxus::prelude::*;

use crate::routes::Route;

/// Session, API client and the resolved navigation state.
#[derive(Clone)]
pub struct AuthState {
    pub api: ApiClient,
    pub nav: Signal<NavState>,
}

impl AuthState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            nav: Signal::new(NavState::Pending),
        }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    pub fn gate(&self) -> NavigationGate {
        NavigationGate::new(self.api.clone())
    }

    /// Re-run the session check and publish the result. The navigation
    /// renders nothing until it completes.
    pub fn resolve_nav(&self) {
        let gate = self.gate();
        let mut nav = self.nav;
        nav.set(NavState::Pending);
        spawn(async move {
            let state = gate.resolve().await;
            nav.set(state);
        });
    }

    /// Clear the session and revoke the old refresh token in the background.
    pub fn logout(&self) {
        let outcome = self.gate().logout();
        let mut nav = self.nav;
        nav.set(NavState::SignedOut);

        if let Some((refresh, access)) = outcome.revocation() {
            let (refresh, access) = (refresh.to_string(), access.to_string());
            let api = self.api.clone();
            spawn(async move {
                if let Err(e) = api.revoke_refresh_token(&refresh, &access).await {
                    tracing::warn!(error = %e, "refresh token revocation failed");
                }
            });
        }

        let target = outcome
            .redirect
            .parse::<Route>()
            .unwrap_or(Route::Login {});
        navigator().replace(target);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// True when the resolved user is an owner.
pub fn use_is_owner() -> bool {
    let auth = use_auth();
    let nav = auth.nav.read();
    let is_owner = nav
        .user()
        .and_then(|u| u.role())
        .is_some_and(|role| role.is_owner());
    is_owner
}
