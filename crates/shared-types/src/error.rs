use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    RateLimited,
    /// The request never produced an HTTP response (DNS, connection, CORS).
    Transport,
    /// The response arrived but its body did not match the expected schema.
    Decode,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::Transport => write!(f, "Transport"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the REST client, the store and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Transport, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Decode, message)
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// The message comes from the body's `detail`, `message` or `error`
    /// field when present (DRF and most JSON APIs use one of these).
    /// A 400 body shaped like `{"field": ["msg", ...]}` is turned into
    /// `field_errors`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

        let message = parsed
            .as_ref()
            .and_then(|v| {
                ["detail", "message", "error"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(|m| m.as_str()))
            })
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        let kind = match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            429 => AppErrorKind::RateLimited,
            _ => AppErrorKind::InternalError,
        };

        let field_errors = match (&kind, parsed.as_ref()) {
            (AppErrorKind::BadRequest | AppErrorKind::ValidationError, Some(v)) => {
                Self::collect_field_errors(v)
            }
            _ => HashMap::new(),
        };

        Self {
            kind,
            message,
            field_errors,
        }
    }

    /// First message per field from a `{"field": ["msg"]}` or `{"field": "msg"}` body.
    fn collect_field_errors(value: &serde_json::Value) -> HashMap<String, String> {
        let Some(map) = value.as_object() else {
            return HashMap::new();
        };
        map.iter()
            .filter(|(key, _)| !matches!(key.as_str(), "detail" | "message" | "error"))
            .filter_map(|(key, v)| {
                let msg = match v {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Array(items) => {
                        items.first().and_then(|m| m.as_str()).map(str::to_string)
                    }
                    _ => None,
                }?;
                Some((key.clone(), msg))
            })
            .collect()
    }

    /// True when the error means the session credential was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// User-facing text: the message, or a generic fallback when it is empty.
    pub fn friendly_message(&self) -> String {
        if self.message.trim().is_empty() {
            "An error occurred".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::decode(err.to_string())
    }
}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
