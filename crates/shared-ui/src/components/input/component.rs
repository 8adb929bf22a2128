use dioxus::prelude::*;

/// Labelled text input with an optional inline error or hint.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: Option<EventHandler<FocusEvent>>,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    /// Error text shown under the field; also marks the input invalid.
    #[props(default)]
    error: Option<String>,
    #[props(default)] hint: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{name}", "{label}" }
            }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                autocomplete: autocomplete,
                disabled: disabled,
                required: required,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                onblur: move |evt| {
                    if let Some(handler) = &on_blur {
                        handler.call(evt);
                    }
                },
                ..merged,
            }
            if let Some(error) = error {
                p { class: "input-error", role: "alert", "{error}" }
            } else if let Some(hint) = hint {
                p { class: "input-hint", "{hint}" }
            }
        }
    }
}

/// Native `<select>` over `(value, label)` pairs.
#[component]
pub fn SelectInput(
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
    #[props(default)] name: String,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{name}", "{label}" }
            }
            select {
                class: "input",
                id: "{name}",
                name: "{name}",
                disabled: disabled,
                onchange: move |evt| on_change.call(evt.value()),
                for (option_value, option_label) in options {
                    option {
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
