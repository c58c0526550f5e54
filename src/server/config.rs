use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub const AUTHORIZE_PATH: &str = "/auth/v1/authorize";
pub const TOKEN_PATH: &str = "/auth/v1/token";
pub const USER_PATH: &str = "/auth/v1/user";

/// Header carrying the backend API key on every backend request.
pub const API_KEY_HEADER: &str = "apikey";
/// Provider name the backend uses for Discord logins.
pub const DISCORD_PROVIDER: &str = "discord";

pub struct Config {
    pub backend_url: String,
    pub backend_api_key: String,
    pub backend_api_secret: String,

    /// Public URL of the OAuth callback, registered with the backend's redirect allow-list.
    pub callback_url: String,
    /// Where users land after a successful link.
    pub link_success_url: String,

    pub discord_bot_token: String,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map instead of mutating
    /// the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable was present and non-empty
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - First missing required variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        Ok(Self {
            backend_url: require("BACKEND_URL")?,
            backend_api_key: require("BACKEND_API_KEY")?,
            backend_api_secret: require("BACKEND_API_SECRET")?,
            callback_url: require("CALLBACK_URL")?,
            link_success_url: require("LINK_SUCCESS_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            bind_address: lookup("BIND_ADDRESS")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }

    /// Configuration pointing at a mock backend.
    #[cfg(test)]
    pub fn for_backend(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.to_string(),
            backend_api_key: "test-api-key".to_string(),
            backend_api_secret: "test-api-secret".to_string(),
            callback_url: "https://bot.example.com/api/auth/callback".to_string(),
            link_success_url: "https://bot.example.com/linked".to_string(),
            discord_bot_token: "test-bot-token".to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn full_env() -> HashMap<&'static str, String> {
        [
            ("BACKEND_URL", "https://backend.example.com"),
            ("BACKEND_API_KEY", "key"),
            ("BACKEND_API_SECRET", "secret"),
            ("CALLBACK_URL", "https://bot.example.com/api/auth/callback"),
            ("LINK_SUCCESS_URL", "https://bot.example.com/linked"),
            ("DISCORD_BOT_TOKEN", "token"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    /// Tests loading a complete configuration.
    ///
    /// Expected: Ok with the default bind address when `BIND_ADDRESS` is unset
    #[test]
    fn loads_complete_configuration() -> Result<(), AppError> {
        let env = full_env();
        let config = Config::from_lookup(|key| env.get(key).cloned())?;

        assert_eq!(config.backend_url, "https://backend.example.com");
        assert_eq!(config.callback_url, "https://bot.example.com/api/auth/callback");
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);

        Ok(())
    }

    /// Tests that a missing required variable is a fatal error naming that variable.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar("CALLBACK_URL"))
    #[test]
    fn missing_variable_is_reported_by_name() {
        let mut env = full_env();
        env.remove("CALLBACK_URL");

        let result = Config::from_lookup(|key| env.get(key).cloned());

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "CALLBACK_URL"
        ));
    }

    /// Tests that a blank value counts as missing.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar("BACKEND_API_SECRET"))
    #[test]
    fn blank_variable_is_missing() {
        let mut env = full_env();
        env.insert("BACKEND_API_SECRET", "   ".to_string());

        let result = Config::from_lookup(|key| env.get(key).cloned());

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "BACKEND_API_SECRET"
        ));
    }

    /// Tests that a blank optional variable falls back to its default.
    ///
    /// Expected: Ok with the default bind address
    #[test]
    fn blank_bind_address_uses_default() -> Result<(), AppError> {
        let mut env = full_env();
        env.insert("BIND_ADDRESS", "".to_string());

        let config = Config::from_lookup(|key| env.get(key).cloned())?;

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);

        Ok(())
    }

    #[test]
    fn explicit_bind_address_is_kept() -> Result<(), AppError> {
        let mut env = full_env();
        env.insert("BIND_ADDRESS", "127.0.0.1:8080".to_string());

        let config = Config::from_lookup(|key| env.get(key).cloned())?;

        assert_eq!(config.bind_address, "127.0.0.1:8080");

        Ok(())
    }
}
