use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{EmptyRow, SkeletonRows};

const SKELETON_ROWS: usize = 5;

/// Table body rows for a list fetch: skeletons while pending, one message
/// row for errors and empty lists, otherwise one row per record.
pub fn list_rows<T>(
    state: &Option<Result<Vec<T>, AppError>>,
    columns: usize,
    empty_message: &str,
    row: impl Fn(&T) -> Element,
) -> Element {
    match state {
        None => rsx! {
            SkeletonRows { rows: SKELETON_ROWS, columns }
        },
        Some(Err(e)) => rsx! {
            EmptyRow { colspan: columns, message: e.friendly_message() }
        },
        Some(Ok(records)) if records.is_empty() => rsx! {
            EmptyRow { colspan: columns, message: empty_message.to_string() }
        },
        Some(Ok(records)) => rsx! {
            {records.iter().map(row)}
        },
    }
}

/// Column titles as owned strings for `DataTableHeader`.
pub fn columns(titles: &[&str]) -> Vec<String> {
    titles.iter().map(|t| t.to_string()).collect()
}
