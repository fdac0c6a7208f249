/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::{API_VERSION, RESPONSE_FORMAT, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::{ApiRequest, Params};
use crate::model::responses::ApiResponse;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Authenticated HTTP client for the Pardot API
///
/// Every request carries the current session key. The first request without a
/// cached key logs in; a request whose cached key is rejected by Pardot logs in
/// again and is re-issued exactly once.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client without performing authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Err(AppError::Http)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Makes an authenticated call
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - The decoded document, or `Empty` when the body was empty
    /// * `Err(AppError::Config)` - If the user key is missing; nothing is sent
    /// * `Err(AppError::Transport)` - If the exchange fails
    /// * `Err(AppError::Api)` - If Pardot reports a failure, after the re-login retry if any
    pub async fn request(&self, request: &ApiRequest) -> Result<ApiResponse, AppError> {
        self.config.credentials.validate_for_request()?;

        let (session, freshly_authenticated) = match self.auth.current_session().await {
            Some(session) => (session, false),
            None => {
                info!("No active session, logging in");
                (self.auth.login().await?, true)
            }
        };

        let mut response = self.send_authenticated(request, &session).await?;

        if !freshly_authenticated && response.is_invalid_session() {
            warn!(
                "Session key rejected for {}, logging in again and retrying",
                request.object
            );
            let session = self.auth.login().await?;
            response = self.send_authenticated(request, &session).await?;
        }

        if response.is_failure() {
            let err = response.to_api_error();
            error!("Pardot call on {} failed: {}", request.object, err);
            return Err(err);
        }

        Ok(response)
    }

    async fn send_authenticated(
        &self,
        request: &ApiRequest,
        session: &Session,
    ) -> Result<ApiResponse, AppError> {
        let authenticated = ApiRequest {
            params: session.authenticate(&request.params),
            ..request.clone()
        };
        make_http_request(
            &self.http_client,
            &self.config.rest_api.base_url,
            &authenticated,
        )
        .await
    }

    /// Gets the current session, logging in if there is none
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Logs in, replacing any cached session
    pub async fn login(&self) -> Result<Session, AppError> {
        self.auth.login().await
    }

    /// Drops the cached session
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Builds the URI of a call
///
/// `<base_url>/<object>/version/3[/do/<operation>][/<id_field>/<id>]`, every
/// segment percent-encoded. The id segment is only added when both the field
/// and its value are non-empty.
///
/// # Example
/// ```
/// use pardot_client::model::http::build_uri;
/// use pardot_client::model::requests::{ApiRequest, Operation};
///
/// let request = ApiRequest::new("prospect")
///     .with_operation(Operation::Read)
///     .with_id("email", "a@b.com");
/// assert_eq!(
///     build_uri("https://pi.pardot.com/api", &request),
///     "https://pi.pardot.com/api/prospect/version/3/do/read/email/a%40b.com"
/// );
/// ```
pub fn build_uri(base_url: &str, request: &ApiRequest) -> String {
    let mut uri = format!(
        "{}/{}/version/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(&request.object),
        API_VERSION
    );

    if let Some(operation) = request.operation {
        uri.push_str("/do/");
        uri.push_str(&urlencoding::encode(operation.as_str()));
    }

    if let Some((id_field, id)) = request.identifier() {
        uri.push('/');
        uri.push_str(&urlencoding::encode(id_field));
        uri.push('/');
        uri.push_str(&urlencoding::encode(id));
    }

    uri
}

/// Builds the form body of a call: the params with `format=json` forced
#[must_use]
pub fn build_form(params: &Params) -> Params {
    let mut form = params.clone();
    form.insert("format".to_string(), RESPONSE_FORMAT.to_string());
    form
}

/// Sends a single call to the Pardot API
///
/// Always a `POST` with the params form encoded. No authentication is added
/// and nothing is retried.
///
/// # Arguments
/// * `client` - The HTTP client to use for the request
/// * `base_url` - API base URL
/// * `request` - The call to perform
///
/// # Returns
/// * `Ok(ApiResponse::Empty)` - The body was empty
/// * `Ok(ApiResponse::Json)` - The decoded body, failure documents included
/// * `Err(AppError::Transport)` - Connection failure, non-2xx status without a
///   Pardot document, or an undecodable body
pub async fn make_http_request(
    client: &Client,
    base_url: &str,
    request: &ApiRequest,
) -> Result<ApiResponse, AppError> {
    let uri = build_uri(base_url, request);
    let form = build_form(&request.params);

    debug!("POST {}", uri);

    let response = client
        .post(&uri)
        .form(&form)
        .send()
        .await
        .map_err(|e| {
            error!("Request to {} failed: {}", uri, e);
            AppError::from_reqwest(&uri, e)
        })?;

    let status = response.status();
    debug!("Response status: {}", status);

    let body = response
        .text()
        .await
        .map_err(|e| AppError::transport(&uri, e.to_string(), Some(status.as_u16())))?;

    parse_response_body(&uri, status, &body)
}

/// Decodes the body of a Pardot response
///
/// Pardot failure documents are returned as responses even with a non-2xx
/// status; the caller decides what a failure means.
pub fn parse_response_body(
    uri: &str,
    status: StatusCode,
    body: &str,
) -> Result<ApiResponse, AppError> {
    if !status.is_success() {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            let response = ApiResponse::Json(value);
            if response.status().is_some() {
                warn!("Pardot document received with status {}", status);
                return Ok(response);
            }
        }
        error!("Request failed with status {}: {}", status, uri);
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            body.to_string()
        };
        return Err(AppError::transport(uri, message, Some(status.as_u16())));
    }

    if body.trim().is_empty() {
        return Ok(ApiResponse::Empty);
    }

    serde_json::from_str::<Value>(body)
        .map(ApiResponse::Json)
        .map_err(|e| {
            error!("Malformed response from {}: {}", uri, e);
            AppError::transport(
                uri,
                format!("malformed response: {e}"),
                Some(status.as_u16()),
            )
        })
}
