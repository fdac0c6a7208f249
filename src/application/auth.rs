/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Authentication module for the Pardot API
//!
//! This module handles:
//! - The login handshake exchanging email, password and user key for a session key
//! - Caching the session key between calls
//! - Replacing the session key when Pardot reports it as invalid

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::{build_uri, make_http_request};
use crate::model::requests::{ApiRequest, ObjectKind, Params};
use crate::model::responses::LoginResponse;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Session information for authenticated requests
#[derive(Debug, Clone)]
pub struct Session {
    /// Session key, sent as `api_key`
    pub api_key: String,
    /// User key, sent as `user_key`
    pub user_key: String,
    /// When the session key was obtained (or seeded)
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session from a session key and user key
    pub fn new(api_key: &str, user_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            user_key: user_key.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Time elapsed since the session key was obtained
    #[must_use]
    pub fn age(&self) -> Duration {
        Utc::now() - self.created_at
    }

    /// Adds the authentication parameters to a copy of `params`
    #[must_use]
    pub fn authenticate(&self, params: &Params) -> Params {
        let mut params = params.clone();
        params.insert("user_key".to_string(), self.user_key.clone());
        params.insert("api_key".to_string(), self.api_key.clone());
        params
    }
}

/// Authentication manager for the Pardot API
///
/// Holds the session key of one set of credentials. The key is shared by every
/// clone of the owning client and guarded by a lock, so concurrent tasks reuse
/// the same session.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// A session key present in `config.credentials.api_key` is used as the
    /// initial session.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client used for the login handshake
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        let seeded = config
            .credentials
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(|key| Session::new(key, &config.credentials.user_key));

        if seeded.is_some() {
            debug!("Using session key from configuration");
        }

        Self {
            config,
            client,
            session: Arc::new(RwLock::new(seeded)),
        }
    }

    /// Returns the cached session, if any
    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Gets the cached session, logging in when there is none
    ///
    /// # Returns
    /// * `Ok(Session)` - Cached or freshly obtained session
    /// * `Err(AppError)` - If login fails
    pub async fn get_session(&self) -> Result<Session, AppError> {
        if let Some(session) = self.current_session().await {
            return Ok(session);
        }

        info!("No active session, logging in");
        self.login().await
    }

    /// Performs the login handshake and stores the new session key
    ///
    /// This call is not authenticated: it sends `email`, `password` and
    /// `user_key` to the `login` object.
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError::Config)` - If email, password or user key is missing
    /// * `Err(AppError::Api)` - If Pardot rejects the credentials
    /// * `Err(AppError::Transport)` - If the exchange fails
    pub async fn login(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;
        credentials.validate_for_login()?;

        let request = ApiRequest::new(ObjectKind::Login.as_str())
            .with_param("email", &credentials.email)
            .with_param("password", &credentials.password)
            .with_param("user_key", &credentials.user_key);

        debug!("Logging in as {}", credentials.email);

        let base_url = &self.config.rest_api.base_url;
        let response = make_http_request(&self.client, base_url, &request).await?;
        let uri = build_uri(base_url, &request);
        let login = LoginResponse::from_response(&uri, response)?;

        let session = Session::new(&login.api_key, &credentials.user_key);

        let mut stored = self.session.write().await;
        *stored = Some(session.clone());

        info!("✓ Login successful for {}", credentials.email);
        Ok(session)
    }

    /// Drops the cached session key; the next call logs in again
    pub async fn logout(&self) {
        info!("Clearing session");

        let mut session = self.session.write().await;
        *session = None;
    }
}
