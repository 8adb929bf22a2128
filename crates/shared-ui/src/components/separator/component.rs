use dioxus::prelude::*;

/// Thin rule between sections. Vertical separators are decorative only.
#[component]
pub fn Separator(
    #[props(default = true)] horizontal: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let orientation = if horizontal { "horizontal" } else { "vertical" };
    let base = vec![
        Attribute::new("class", "separator", None, false),
        Attribute::new("data-orientation", orientation, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if horizontal {
            hr { ..merged }
        } else {
            div { role: "none", ..merged }
        }
    }
}
