use shared_types::{
    AppError, LoginRequest, LoginResponse, LogoutRequest, RegisterRequest, User,
    UsernameAvailability,
};
use validator::Validate;

use crate::http::ApiClient;

pub const LOGIN_PATH: &str = "/users/login/";
pub const LOGOUT_PATH: &str = "/users/logout/";
pub const CURRENT_USER_PATH: &str = "/accounts/users/me/";
pub const REGISTER_PATH: &str = "/accounts/register/";
pub const CHECK_USERNAME_PATH: &str = "/accounts/check-username/";

/// Usernames shorter than this are never sent for an availability check.
pub const MIN_USERNAME_CHECK_LEN: usize = 3;

impl ApiClient {
    /// Log in and start a session with the returned token pair.
    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<Option<User>, AppError> {
        request.validate()?;
        let response: LoginResponse = self
            .post_public(LOGIN_PATH, request)
            .await
            .map_err(login_error)?;
        let (tokens, user) = response.into_parts();
        self.session().begin(&tokens);
        if let Some(user) = &user {
            self.session().set_user(user.clone());
        }
        tracing::info!("login succeeded");
        Ok(user)
    }

    /// Create an account. Validation runs before anything is sent.
    ///
    /// `username_taken` is the latest availability answer for this username,
    /// if one was fetched.
    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(
        &self,
        request: &RegisterRequest,
        username_taken: Option<bool>,
    ) -> Result<(), AppError> {
        validate_registration(request, username_taken)?;
        self.post_public_empty(REGISTER_PATH, request).await?;
        tracing::info!("registration succeeded");
        Ok(())
    }

    /// `Some(true)` when the username is free, `Some(false)` when taken,
    /// `None` when the name is too short to check or the check failed.
    #[tracing::instrument(skip(self))]
    pub async fn check_username(&self, username: &str) -> Option<bool> {
        let username = username.trim();
        if username.chars().count() < MIN_USERNAME_CHECK_LEN {
            return None;
        }
        let query = [("username", username.to_string())];
        match self
            .get_public::<UsernameAvailability>(CHECK_USERNAME_PATH, &query)
            .await
        {
            Ok(answer) => Some(answer.available),
            Err(e) => {
                tracing::warn!(error = %e, "username availability check failed");
                None
            }
        }
    }

    /// `GET /accounts/users/me/` with the session's access token.
    #[tracing::instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, AppError> {
        let user: User = self.get_authorized(CURRENT_USER_PATH).await?;
        self.session().set_user(user.clone());
        Ok(user)
    }

    /// Best-effort server-side revocation of a refresh token. The endpoint
    /// requires the access token the ended session held.
    #[tracing::instrument(skip_all)]
    pub async fn revoke_refresh_token(&self, refresh_token: &str, access_token: &str) -> Result<(), AppError> {
        let body = LogoutRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.post_bearer_empty(LOGOUT_PATH, &body, access_token).await
    }
}

/// Keep the server's `detail`; replace the bare status fallback.
fn login_error(err: AppError) -> AppError {
    if err.message.starts_with("Request failed with status") {
        AppError {
            message: "Login failed".to_string(),
            ..err
        }
    } else {
        err
    }
}

/// Local registration checks: field rules first, then the known
/// availability of the username.
pub fn validate_registration(
    request: &RegisterRequest,
    username_taken: Option<bool>,
) -> Result<(), AppError> {
    request.validate()?;
    if username_taken == Some(true) {
        let mut fields = std::collections::HashMap::new();
        fields.insert(
            "username".to_string(),
            "Username is already taken".to_string(),
        );
        return Err(AppError::validation("Username is already taken", fields));
    }
    Ok(())
}
