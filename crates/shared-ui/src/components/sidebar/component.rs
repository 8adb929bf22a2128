use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight};
use dioxus_free_icons::Icon;

/// Desktop navigation rail. Collapse state is owned by the caller so the
/// same toggle can drive other layout pieces.
#[component]
pub fn Sidebar(
    collapsed: bool,
    on_toggle: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if collapsed { "collapsed" } else { "expanded" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside {
            ..merged,
            {children}
            button {
                class: "sidebar-toggle",
                r#type: "button",
                "aria-label": if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                onclick: move |_| on_toggle.call(()),
                if collapsed {
                    Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                } else {
                    Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                }
            }
        }
    }
}

/// Brand row at the top of the sidebar.
#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-nav",
            ul { class: "sidebar-menu", {children} }
        }
    }
}

/// One navigation entry. The caller supplies the link element.
#[component]
pub fn SidebarMenuItem(#[props(default = false)] active: bool, children: Element) -> Element {
    rsx! {
        li {
            class: "sidebar-menu-item",
            "data-active": if active { "true" } else { "false" },
            {children}
        }
    }
}

/// Bottom area for the profile block and session actions.
#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

/// Page area next to the sidebar.
#[component]
pub fn SidebarInset(
    #[props(default = false)] collapsed: bool,
    children: Element,
) -> Element {
    rsx! {
        main {
            class: "sidebar-inset",
            "data-sidebar": if collapsed { "collapsed" } else { "expanded" },
            {children}
        }
    }
}
