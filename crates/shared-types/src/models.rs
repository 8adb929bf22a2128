use serde::{Deserialize, Serialize};

/// Account role controlling which parts of the dashboard are reachable.
///
/// - `Owner`: full access, including user management.
/// - `Accountant`: day-to-day ledger access.
/// - `Other`: any other non-empty role string the backend hands out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Owner,
    Accountant,
    Other(String),
}

impl UserRole {
    /// Parse the `role` field of a user record. Empty strings are not a role.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_lowercase().as_str() {
            "owner" => UserRole::Owner,
            "accountant" => UserRole::Accountant,
            _ => UserRole::Other(trimmed.to_string()),
        })
    }

    /// Lowercase string as stored by the backend.
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Owner => "owner",
            UserRole::Accountant => "accountant",
            UserRole::Other(s) => s.as_str(),
        }
    }

    /// Human-readable label for badges and the profile card.
    pub fn label(&self) -> &str {
        match self {
            UserRole::Owner => "Owner",
            UserRole::Accountant => "Accountant",
            UserRole::Other(s) => s.as_str(),
        }
    }

    pub fn is_owner(&self) -> bool {
        matches!(self, UserRole::Owner)
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::parse(&s).unwrap_or(UserRole::Other(s))
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

/// The signed-in account as returned by `GET /accounts/users/me/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Raw role string; use [`User::role`] for the parsed form.
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl User {
    /// Parsed role, `None` when the backend sent an empty or missing role.
    pub fn role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }

    /// Two-letter avatar fallback used when there is no profile image.
    pub fn initials(&self) -> String {
        self.username
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Access/refresh token pair issued by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Login response. The backend answers either with a flat token pair or
/// with the user record and a nested `tokens` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LoginResponse {
    Nested {
        #[serde(default)]
        user: Option<User>,
        tokens: TokenPair,
    },
    Flat {
        access: String,
        refresh: String,
        #[serde(default)]
        user: Option<User>,
    },
}

impl LoginResponse {
    pub fn into_parts(self) -> (TokenPair, Option<User>) {
        match self {
            LoginResponse::Nested { user, tokens } => (tokens, user),
            LoginResponse::Flat {
                access,
                refresh,
                user,
            } => (TokenPair { access, refresh }, user),
        }
    }
}

/// Register request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 3,
            max = 150,
            message = "Username must be between 3 and 150 characters"
        ))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(must_match(other = "password", message = "Passwords do not match"))
    )]
    pub password2: String,
    #[serde(default = "default_register_role")]
    pub role: String,
}

fn default_register_role() -> String {
    UserRole::Accountant.as_str().to_string()
}

impl Default for RegisterRequest {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            password2: String::new(),
            role: default_register_role(),
        }
    }
}

/// Answer of `GET /accounts/check-username/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsernameAvailability {
    pub available: bool,
}

/// Refresh token request body for `POST /accounts/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Refresh response; some backends rotate the refresh token too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

/// Logout request body for `POST /users/logout/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogoutRequest {
    pub refresh_token: String,
}
