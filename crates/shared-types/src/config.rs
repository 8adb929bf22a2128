//! Display dictionary: currency symbol, date formats and the label and
//! colour tables used when rendering statuses, roles, contact types and
//! payment methods.

use chrono::NaiveDate;

pub const CURRENCY_SYMBOL: &str = "₹";

/// `chrono` format strings for date-only and timestamp columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Badge colour for a record status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Gray,
    Blue,
    Orange,
    Green,
    Red,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Gray => "gray",
            StatusColor::Blue => "blue",
            StatusColor::Orange => "orange",
            StatusColor::Green => "green",
            StatusColor::Red => "red",
        }
    }
}

pub const STATUS_COLORS: &[(&str, StatusColor)] = &[
    ("draft", StatusColor::Gray),
    ("confirmed", StatusColor::Blue),
    ("sent", StatusColor::Orange),
    ("paid", StatusColor::Green),
    ("overdue", StatusColor::Red),
    ("cancelled", StatusColor::Gray),
    ("active", StatusColor::Green),
    ("inactive", StatusColor::Gray),
];

pub const ROLES: &[(&str, &str)] = &[
    ("owner", "Owner"),
    ("accountant", "Accountant"),
    ("admin", "Admin"),
    ("invoicing_user", "Invoicing User"),
    ("contact", "Contact"),
];

pub const CONTACT_TYPES: &[(&str, &str)] = &[
    ("customer", "Customer"),
    ("vendor", "Vendor"),
    ("both", "Both"),
];

pub const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("cash", "Cash"),
    ("bank_transfer", "Bank Transfer"),
    ("cheque", "Cheque"),
    ("credit_card", "Credit Card"),
    ("upi", "UPI"),
    ("other", "Other"),
];

fn lookup<'a>(table: &'a [(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, label)| *label)
}

/// Colour for a status string; unknown statuses render gray.
pub fn status_color(status: &str) -> StatusColor {
    STATUS_COLORS
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(status))
        .map(|(_, color)| *color)
        .unwrap_or(StatusColor::Gray)
}

/// Title-cased fallback for keys missing from a table: `bank_transfer` -> `Bank Transfer`.
pub fn humanize(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn role_label(role: &str) -> String {
    lookup(ROLES, role)
        .map(str::to_string)
        .unwrap_or_else(|| humanize(role))
}

pub fn contact_type_label(kind: &str) -> String {
    lookup(CONTACT_TYPES, kind)
        .map(str::to_string)
        .unwrap_or_else(|| humanize(kind))
}

pub fn payment_method_label(method: &str) -> String {
    lookup(PAYMENT_METHODS, method)
        .map(str::to_string)
        .unwrap_or_else(|| humanize(method))
}

pub fn status_label(status: &str) -> String {
    humanize(status)
}

/// Format an amount as rupees with Indian digit grouping: `₹12,34,567.50`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = if whole.len() <= 3 {
        whole.to_string()
    } else {
        let (head, last3) = whole.split_at(whole.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            parts.push(&head[start..end]);
            end = start;
        }
        parts.reverse();
        format!("{},{}", parts.join(","), last3)
    };

    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{fraction}")
}

/// `2024-03-18` style date for table cells.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date input; blank or malformed input is `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Trim an ISO-8601 timestamp to `YYYY-MM-DD HH:MM:SS`; returns the input
/// unchanged when it does not look like one.
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format(DATE_TIME_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
