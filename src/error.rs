/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Error types for the Pardot client
//!
//! Failures fall into three families callers can branch on:
//! - [`AppError::Config`]: a required credential is missing before the call is made
//! - [`AppError::Transport`]: the HTTP exchange failed or the response could not be decoded
//! - [`AppError::Api`]: Pardot answered with a failure document
//!
//! None of them are retried by the client, except for the single re-login performed
//! when Pardot reports an invalid or expired session key.

use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// A required configuration field is missing or empty
    #[error("invalid config: `{0}` is required")]
    Config(String),

    /// Network or HTTP level failure, or a malformed response body
    #[error("pardot transport error for URI: {uri}, message: {message}, HTTP code: {}", http_code(.status))]
    Transport {
        /// URI of the failed request
        uri: String,
        /// Underlying error message
        message: String,
        /// HTTP status code, when a response was received
        status: Option<u16>,
    },

    /// Failure status reported by Pardot in a well formed response
    #[error("pardot API error: {message}")]
    Api {
        /// Pardot error code (`@attributes.err_code`), when present
        code: Option<i64>,
        /// Pardot error message (`err`)
        message: String,
    },

    /// HTTP client construction error
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn http_code(status: &Option<u16>) -> u16 {
    status.unwrap_or(0)
}

impl AppError {
    /// Builds a transport error for `uri`
    pub fn transport(uri: &str, message: impl Into<String>, status: Option<u16>) -> Self {
        AppError::Transport {
            uri: uri.to_string(),
            message: message.into(),
            status,
        }
    }

    /// Builds a transport error from a `reqwest` failure, keeping its status if any
    pub fn from_reqwest(uri: &str, err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        Self::transport(uri, err.to_string(), status)
    }

    /// True for [`AppError::Config`]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, AppError::Config(_))
    }

    /// True for [`AppError::Transport`]
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, AppError::Transport { .. })
    }

    /// True for [`AppError::Api`]
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        matches!(self, AppError::Api { .. })
    }

    /// Pardot error code carried by an [`AppError::Api`]
    #[must_use]
    pub fn api_error_code(&self) -> Option<i64> {
        match self {
            AppError::Api { code, .. } => *code,
            _ => None,
        }
    }
}
