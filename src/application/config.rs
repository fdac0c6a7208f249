/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::utils::config::{get_credential_from_env, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the Pardot API
pub struct Credentials {
    /// Email address of the account used to log in
    pub email: String,
    /// Password of the account used to log in
    pub password: String,
    /// User key of the account, sent with every authenticated call
    pub user_key: String,
    /// Session key obtained from a previous login, reused until Pardot rejects it
    pub api_key: Option<String>,
}

impl Credentials {
    /// Creates credentials without a cached session key
    pub fn new(email: &str, password: &str, user_key: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            user_key: user_key.to_string(),
            api_key: None,
        }
    }

    /// Checks the fields every authenticated call needs
    pub fn validate_for_request(&self) -> Result<(), AppError> {
        require("user_key", &self.user_key)
    }

    /// Checks the fields the login handshake needs
    pub fn validate_for_login(&self) -> Result<(), AppError> {
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("user_key", &self.user_key)
    }
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Config(field.to_string()));
    }
    Ok(())
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Pardot API, without the object segment
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Pardot API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from environment variables
    ///
    /// Reads a `.env` file if present, then:
    /// - `PARDOT_EMAIL`, `PARDOT_PASSWORD`, `PARDOT_USER_KEY`: credentials
    /// - `PARDOT_API_KEY`: optional session key from a previous login
    /// - `PARDOT_BASE_URL`: API base URL (default `https://pi.pardot.com/api`)
    /// - `PARDOT_REST_TIMEOUT`: request timeout in seconds (default 30)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                email: get_credential_from_env("PARDOT_EMAIL"),
                password: get_credential_from_env("PARDOT_PASSWORD"),
                user_key: get_credential_from_env("PARDOT_USER_KEY"),
                api_key: get_env_or_none::<String>("PARDOT_API_KEY").filter(|k| !k.is_empty()),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("PARDOT_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("PARDOT_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration from explicit credentials and default REST settings
    ///
    /// Does not touch the environment.
    pub fn with_credentials(email: &str, password: &str, user_key: &str) -> Self {
        Config {
            credentials: Credentials::new(email, password, user_key),
            rest_api: RestApiConfig::default(),
        }
    }

    /// Overrides the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = base_url.to_string();
        self
    }

    /// Overrides the request timeout, in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Seeds a session key from a previous login
    #[must_use]
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.credentials.api_key = Some(api_key.to_string());
        self
    }
}
