use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_APP_NAME: &str = "Shiv Accounts Cloud";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Runtime settings for the REST client and the app shell.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000/api`.
    pub api_url: String,
    pub app_name: String,
    pub app_version: String,
    pub oauth: OAuthConfig,
}

/// OAuth client settings. Read and passed through, never used for a flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OAuthConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub callback_url: Option<String>,
}

impl OAuthConfig {
    pub fn is_configured(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            app_version: DEFAULT_APP_VERSION.to_string(),
            oauth: OAuthConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = get("API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url,
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_version: get("APP_VERSION").unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
            oauth: OAuthConfig {
                client_id: get("OAUTH_CLIENT_ID"),
                client_secret: get("OAUTH_CLIENT_SECRET"),
                callback_url: get("OAUTH_CALLBACK_URL"),
            },
        }
    }

    /// Process environment, after loading `.env` if one exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "no .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Values baked in at compile time; browsers have no process environment.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "API_URL" => option_env!("API_URL"),
                "APP_NAME" => option_env!("APP_NAME"),
                "APP_VERSION" => option_env!("APP_VERSION"),
                "OAUTH_CLIENT_ID" => option_env!("OAUTH_CLIENT_ID"),
                "OAUTH_CLIENT_SECRET" => option_env!("OAUTH_CLIENT_SECRET"),
                "OAUTH_CALLBACK_URL" => option_env!("OAUTH_CALLBACK_URL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

/// Load the config from the environment and store it in the global
/// `OnceLock`. Only the first call has effect.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = ClientConfig::from_env();
        tracing::info!(
            api_url = %config.api_url,
            app = %config.app_name,
            version = %config.app_version,
            oauth = config.oauth.is_configured(),
            "client config loaded"
        );
        config
    })
}

/// The loaded config, or defaults if `load_config()` hasn't been called yet.
pub fn config() -> &'static ClientConfig {
    static DEFAULT: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(ClientConfig::default))
}
