//! Shared store for catalog, cart, orders and analytics, held in a signal so
//! pages re-render when a fetch commits.

use client::{ApiStore, NavState, StoreAccess, StoreActions};
use dioxus::prelude::*;

use crate::auth::use_auth;

/// [`ApiStore`] living in a Dioxus signal.
#[derive(Clone, Copy, PartialEq)]
pub struct StoreSignal(Signal<ApiStore>);

impl StoreSignal {
    pub fn signal(&self) -> Signal<ApiStore> {
        self.0
    }
}

impl StoreAccess for StoreSignal {
    fn update<R>(&self, f: impl FnOnce(&mut ApiStore) -> R) -> R {
        let mut signal = self.0;
        let mut store = signal.write();
        f(&mut store)
    }

    fn read<R>(&self, f: impl FnOnce(&ApiStore) -> R) -> R {
        f(&self.0.peek())
    }
}

pub type ApiContext = StoreActions<StoreSignal>;

/// Provides the store. Catalog data loads on mount; cart, orders and
/// analytics load whenever the navigation resolves to a signed-in user.
#[component]
pub fn ApiProvider(children: Element) -> Element {
    let auth = use_auth();
    let actions = use_context_provider(|| {
        StoreActions::new(auth.api.clone(), StoreSignal(Signal::new(ApiStore::new())))
    });

    let public = actions.clone();
    use_hook(move || {
        spawn(async move {
            public.load_public().await;
        });
    });

    let nav = auth.nav;
    use_effect(move || {
        if matches!(*nav.read(), NavState::SignedIn { .. }) {
            let actions = actions.clone();
            spawn(async move {
                actions.load_session().await;
            });
        }
    });

    rsx! {
        {children}
    }
}

pub fn use_api() -> ApiContext {
    use_context::<ApiContext>()
}

/// Current store contents; subscribes the calling component.
pub fn use_store() -> Signal<ApiStore> {
    use_api().store().signal()
}
