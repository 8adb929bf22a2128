use client::auth::validate_registration;
use dioxus::prelude::*;
use shared_types::config::ROLES;
use shared_types::{RegisterRequest, UserRole};
use shared_ui::{Button, Input, SelectInput};
use std::collections::HashMap;

use crate::auth::use_auth;

pub const REGISTERED_NOTICE: &str = "Registration successful! You can now log in.";

/// Roles offered at sign-up.
fn role_options() -> Vec<(String, String)> {
    [UserRole::Owner, UserRole::Accountant]
        .iter()
        .map(|role| {
            let label = ROLES
                .iter()
                .find(|(key, _)| *key == role.as_str())
                .map(|(_, label)| label.to_string())
                .unwrap_or_else(|| role.label().to_string());
            (role.as_str().to_string(), label)
        })
        .collect()
}

/// Registration form. Availability of the username is checked when the
/// field loses focus; local validation runs before anything is sent.
#[component]
pub fn RegisterForm(on_registered: EventHandler<String>) -> Element {
    let auth = use_auth();
    let mut form = use_signal(RegisterRequest::default);
    // Latest availability answer: Some(true) free, Some(false) taken.
    let mut available = use_signal(|| Option::<bool>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let check_api = auth.api.clone();
    let check_username = move |_: FocusEvent| {
        let api = check_api.clone();
        let username = form.read().username.clone();
        spawn(async move {
            let answer = api.check_username(&username).await;
            // Drop answers for a name the user has since edited.
            if form.read().username == username {
                available.set(answer);
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        let api = auth.api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = form();
            let taken = available().map(|free| !free);
            if let Err(e) = validate_registration(&request, taken) {
                field_errors.set(e.field_errors.clone());
                if e.field_errors.is_empty() {
                    error_msg.set(Some(e.friendly_message()));
                }
                return;
            }

            loading.set(true);
            match api.register(&request, taken).await {
                Ok(()) => {
                    form.set(RegisterRequest::default());
                    available.set(None);
                    on_registered.call(REGISTERED_NOTICE.to_string());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "registration rejected");
                    field_errors.set(e.field_errors.clone());
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    let username_hint = match available() {
        Some(true) => Some("Username is available".to_string()),
        _ => None,
    };
    let username_error = field_errors()
        .get("username")
        .cloned()
        .or_else(|| (available() == Some(false)).then(|| "Username is already taken".to_string()));

    rsx! {
        if let Some(err) = error_msg() {
            div { class: "auth-error", role: "alert", "{err}" }
        }
        form { class: "auth-form", onsubmit: handle_submit,
            Input {
                name: "username",
                label: "Username",
                autocomplete: "username",
                value: form.read().username.clone(),
                required: true,
                error: username_error,
                hint: username_hint,
                on_input: move |e: FormEvent| {
                    form.write().username = e.value();
                    available.set(None);
                },
                on_blur: check_username,
            }
            Input {
                name: "email",
                label: "Email",
                input_type: "email",
                autocomplete: "email",
                value: form.read().email.clone(),
                required: true,
                error: field_errors().get("email").cloned(),
                on_input: move |e: FormEvent| form.write().email = e.value(),
            }
            Input {
                name: "password",
                label: "Password",
                input_type: "password",
                autocomplete: "new-password",
                value: form.read().password.clone(),
                required: true,
                error: field_errors().get("password").cloned(),
                on_input: move |e: FormEvent| form.write().password = e.value(),
            }
            Input {
                name: "password2",
                label: "Confirm password",
                input_type: "password",
                autocomplete: "new-password",
                value: form.read().password2.clone(),
                required: true,
                error: field_errors().get("password2").cloned(),
                on_input: move |e: FormEvent| form.write().password2 = e.value(),
            }
            SelectInput {
                name: "role",
                label: "Role",
                value: form.read().role.clone(),
                options: role_options(),
                on_change: move |value: String| form.write().role = value,
            }
            Button {
                button_type: "submit",
                class: "auth-submit",
                loading: loading(),
                if loading() { "Creating account..." } else { "Register" }
            }
        }
    }
}
