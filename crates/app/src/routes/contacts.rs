use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::config::{contact_type_label, CONTACT_TYPES};
use shared_types::ContactRequest;
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableHeader, DataTableRow,
    Input, SelectInput, StatusBadge,
};

use super::form_view::options;
use super::list_view::{columns, list_rows};
use crate::auth::use_auth;

const COLUMNS: &[&str] = &["Name", "Type", "Email", "Phone", "Location", "GSTIN", "Status", ""];

/// Customer and vendor master: add form above the list, delete per row
/// behind a confirmation click.
#[component]
pub fn Contacts() -> Element {
    let auth = use_auth();
    let list_api = auth.api.clone();
    let mut contacts = use_resource(move || {
        let api = list_api.clone();
        async move { api.list_contacts().await }
    });
    let mut form = use_signal(ContactRequest::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut confirm_delete = use_signal(|| Option::<i64>::None);

    let create_api = auth.api.clone();
    let handle_submit = move |evt: FormEvent| {
        let api = create_api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            loading.set(true);
            match api.create_contact(&form()).await {
                Ok(()) => {
                    form.set(ContactRequest::default());
                    contacts.restart();
                }
                Err(e) => {
                    field_errors.set(e.field_errors.clone());
                    if e.field_errors.is_empty() {
                        error_msg.set(Some(e.friendly_message()));
                    }
                }
            }
            loading.set(false);
        }
    };

    let delete_api = auth.api.clone();
    let delete = move |id: i64| {
        let api = delete_api.clone();
        spawn(async move {
            confirm_delete.set(None);
            match api.delete_contact(id).await {
                Ok(()) => contacts.restart(),
                Err(e) => {
                    tracing::warn!(error = %e, contact_id = id, "contact delete failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./ledger.css") }
        div { class: "page-header",
            p { class: "page-subtitle", "Customers and vendors" }
        }
        if let Some(err) = error_msg() {
            div { class: "page-error", role: "alert", "{err}" }
        }
        form { class: "ledger-form", onsubmit: handle_submit,
            Input {
                name: "name",
                label: "Name",
                value: form.read().name.clone(),
                required: true,
                error: field_errors().get("name").cloned(),
                on_input: move |e: FormEvent| form.write().name = e.value(),
            }
            SelectInput {
                name: "contact_type",
                label: "Type",
                value: form.read().contact_type.clone(),
                options: options(CONTACT_TYPES),
                on_change: move |value: String| form.write().contact_type = value,
            }
            Input {
                name: "email",
                label: "Email",
                input_type: "email",
                value: form.read().email.clone(),
                required: true,
                error: field_errors().get("email").cloned(),
                on_input: move |e: FormEvent| form.write().email = e.value(),
            }
            Input {
                name: "phone",
                label: "Mobile",
                value: form.read().phone.clone(),
                error: field_errors().get("phone").cloned(),
                on_input: move |e: FormEvent| form.write().phone = e.value(),
            }
            Input {
                name: "city",
                label: "City",
                value: form.read().city.clone(),
                on_input: move |e: FormEvent| form.write().city = e.value(),
            }
            Input {
                name: "state",
                label: "State",
                value: form.read().state.clone(),
                on_input: move |e: FormEvent| form.write().state = e.value(),
            }
            Input {
                name: "pincode",
                label: "Pincode",
                value: form.read().pincode.clone(),
                error: field_errors().get("pincode").cloned(),
                on_input: move |e: FormEvent| form.write().pincode = e.value(),
            }
            Button { button_type: "submit", loading: loading(), "Add contact" }
        }
        DataTable {
            DataTableHeader { columns: columns(COLUMNS) }
            DataTableBody {
                {list_rows(&contacts.read(), COLUMNS.len(), "No contacts yet", |contact| {
                    let id = contact.id;
                    let delete = delete.clone();
                    rsx! {
                        DataTableRow { key: "{contact.id}",
                            DataTableCell { "{contact.name}" }
                            DataTableCell { {contact_type_label(&contact.contact_type)} }
                            DataTableCell { "{contact.email}" }
                            DataTableCell { {contact.phone.clone().unwrap_or_default()} }
                            DataTableCell { {contact.location()} }
                            DataTableCell { {contact.gst_number.clone().unwrap_or_default()} }
                            DataTableCell {
                                StatusBadge { status: contact.status().to_string() }
                            }
                            DataTableCell {
                                if confirm_delete() == Some(id) {
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        onclick: move |_| delete(id),
                                        "Confirm delete"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| confirm_delete.set(None),
                                        "Cancel"
                                    }
                                } else {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| confirm_delete.set(Some(id)),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}
