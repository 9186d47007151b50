//! Environment-driven server configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file by `main`. Leptos' own options (site root, output name) are read
//! separately by `leptos::config::get_configuration`.

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid boolean for {key}: {value}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TCP port to listen on (`PORT`, default 3000).
    pub port: u16,
    /// Mark the session cookie `Secure` (`COOKIE_SECURE`, default false).
    pub cookie_secure: bool,
    /// Enables `/auth/dev-login` for this address (`DEV_USER_EMAIL`).
    pub dev_user_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, cookie_secure: false, dev_user_email: None }
    }
}

impl Config {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or `COOKIE_SECURE`
    /// is not a recognized boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Unset or blank keys take defaults.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { key: "COOKIE_SECURE", value: raw })?,
            None => false,
        };

        Ok(Self { port, cookie_secure, dev_user_email: get("DEV_USER_EMAIL") })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
