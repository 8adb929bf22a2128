use dioxus::prelude::*;

/// Horizontally scrollable list table.
#[component]
pub fn DataTable(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "data-table", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            table { {children} }
        }
    }
}

/// Header row built from column titles.
#[component]
pub fn DataTableHeader(columns: Vec<String>) -> Element {
    rsx! {
        thead {
            tr {
                for column in columns {
                    th { scope: "col", "{column}" }
                }
            }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(
    #[props(default = false)] numeric: bool,
    children: Element,
) -> Element {
    rsx! {
        td {
            class: if numeric { "data-table-cell numeric" } else { "data-table-cell" },
            {children}
        }
    }
}

/// Single full-width row used for empty results and load errors.
#[component]
pub fn EmptyRow(colspan: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}
