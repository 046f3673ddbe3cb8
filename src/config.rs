//! Run configuration.
//!
//! Everything the pipeline needs is read once from environment-style
//! key/value input (a `.env` file is loaded into the environment first) and
//! passed to each stage explicitly.
//!
//! Values are not validated here: a missing base URL or webhook shows up as
//! a failure of the stage that uses it.

use tracing::{debug, warn};

use crate::auth::credentials::DEFAULT_CLIENT_ID;
use crate::auth::Credentials;
use crate::utils::TimestampStyle;

const BASE_URL_KEY: &str = "BASE_URL";
const CLIENT_ID_KEY: &str = "CLIENT_ID";
const CLIENT_SECRET_KEY: &str = "CLIENT_SECRET";
const USERNAME_KEY: &str = "USERNAME";
const PASSWORD_KEY: &str = "PASSWORD";
const WEBHOOK_URL_KEY: &str = "SLACK_WEBHOOK_URL";
const TIMESTAMP_STYLE_KEY: &str = "TIMESTAMP_STYLE";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub credentials: Credentials,
    pub webhook_url: String,
    pub timestamp_style: TimestampStyle,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| match lookup(key) {
            Some(value) => value,
            None => {
                debug!(key = key, "Configuration value not set");
                String::new()
            }
        };

        let timestamp_style = match lookup(TIMESTAMP_STYLE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Falling back to default timestamp style");
                TimestampStyle::default()
            }),
            None => TimestampStyle::default(),
        };

        Self {
            base_url: required(BASE_URL_KEY),
            credentials: Credentials {
                client_id: lookup(CLIENT_ID_KEY).unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
                client_secret: required(CLIENT_SECRET_KEY),
                username: required(USERNAME_KEY),
                password: required(PASSWORD_KEY),
            },
            webhook_url: required(WEBHOOK_URL_KEY),
            timestamp_style,
        }
    }
}
