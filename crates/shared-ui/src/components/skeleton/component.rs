use dioxus::prelude::*;

/// Pulsing placeholder block shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged }
    }
}

/// Placeholder table rows for a list that is still loading.
#[component]
pub fn SkeletonRows(rows: usize, columns: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        for row in 0..rows {
            tr { key: "{row}", class: "skeleton-row",
                for column in 0..columns {
                    td { key: "{column}",
                        div { class: "skeleton skeleton-line" }
                    }
                }
            }
        }
    }
}
