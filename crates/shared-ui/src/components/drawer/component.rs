use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// Edge the drawer slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawerSide {
    #[default]
    Left,
    Right,
}

impl DrawerSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawerSide::Left => "left",
            DrawerSide::Right => "right",
        }
    }
}

/// Modal side panel used for mobile navigation. Renders nothing while
/// closed; clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn Drawer(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: DrawerSide,
    #[props(default)] title: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "drawer-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "drawer-panel",
                role: "dialog",
                "aria-modal": "true",
                "data-side": side.as_str(),
                onclick: move |evt| evt.stop_propagation(),
                div { class: "drawer-header",
                    h2 { class: "drawer-title", "{title}" }
                    button {
                        class: "drawer-close",
                        r#type: "button",
                        "aria-label": "Close menu",
                        onclick: move |_| on_close.call(()),
                        Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                    }
                }
                div { class: "drawer-body", {children} }
            }
        }
    }
}
