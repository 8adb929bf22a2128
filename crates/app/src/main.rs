use std::sync::Arc;

use client::{ApiClient, Session, TokenStore};
use dioxus::prelude::*;

mod api_context;
mod auth;
mod components;
mod routes;
use api_context::ApiProvider;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Persisted token storage for the current platform.
fn token_store() -> Arc<dyn TokenStore + Send + Sync> {
    #[cfg(feature = "web")]
    {
        Arc::new(client::BrowserTokenStore)
    }
    #[cfg(not(feature = "web"))]
    {
        Arc::new(client::MemoryTokenStore::new())
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = client::load_config();
        let session = Session::new(token_store());
        session.restore();
        AuthState::new(ApiClient::new(config, session))
    });

    let app_name = client::config().app_name.clone();

    rsx! {
        document::Title { "{app_name}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ApiProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "page-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
