use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};
use std::collections::HashMap;

use super::register::RegisterForm;
use crate::auth::use_auth;
use crate::routes::Route;

/// Sign-in page. The registration form lives on the same page behind a
/// toggle.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut show_register = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let api = auth.api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            match api.login(&request).await {
                Ok(_) => {
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login rejected");
                    if e.field_errors.is_empty() {
                        error_msg.set(Some(e.friendly_message()));
                    } else {
                        field_errors.set(e.field_errors.clone());
                    }
                }
            }
            loading.set(false);
        }
    };

    let app_name = client::config().app_name.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "{app_name}" }
                    CardDescription {
                        if show_register() { "Create an account" } else { "Sign in to your account" }
                    }
                }

                CardContent {
                    if let Some(message) = notice() {
                        div { class: "auth-success", "{message}" }
                    }

                    if show_register() {
                        RegisterForm {
                            on_registered: move |message: String| {
                                notice.set(Some(message));
                                show_register.set(false);
                            },
                        }
                    } else {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", role: "alert", "{err}" }
                        }
                        form { class: "auth-form", onsubmit: handle_login,
                            Input {
                                name: "username",
                                label: "Username",
                                autocomplete: "username",
                                value: username(),
                                required: true,
                                error: field_errors().get("username").cloned(),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                            Input {
                                name: "password",
                                label: "Password",
                                input_type: "password",
                                autocomplete: "current-password",
                                value: password(),
                                required: true,
                                error: field_errors().get("password").cloned(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            Button {
                                button_type: "submit",
                                class: "auth-submit",
                                loading: loading(),
                                if loading() { "Signing in..." } else { "Sign In" }
                            }
                        }
                    }
                }

                CardFooter {
                    button {
                        class: "auth-switch",
                        r#type: "button",
                        onclick: move |_| {
                            notice.set(None);
                            show_register.set(!show_register());
                        },
                        if show_register() {
                            "Already have an account? Sign in"
                        } else {
                            "Don't have an account? Register"
                        }
                    }
                }
            }
        }
    }
}
