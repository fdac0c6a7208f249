/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::{INVALID_API_KEY_ERR_CODE, STATUS_FAIL};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key holding the status attributes of a Pardot JSON document
const ATTRIBUTES_KEY: &str = "@attributes";

/// Decoded response of a Pardot API call
///
/// Pardot documents are kept verbatim; this type only knows how to read the
/// status attributes shared by every document:
///
/// ```json
/// {"@attributes": {"stat": "fail", "version": 1, "err_code": 1}, "err": "Invalid API key or user key"}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The call succeeded and returned no body
    Empty,
    /// Decoded JSON document
    Json(Value),
}

impl ApiResponse {
    /// True when the call returned no body
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, ApiResponse::Empty)
    }

    /// The decoded document, if any
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Empty => None,
        }
    }

    /// Converts the response to a JSON value, `true` for an empty response
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            ApiResponse::Empty => Value::Bool(true),
            ApiResponse::Json(value) => value.clone(),
        }
    }

    /// Consumes the response, returning `true` for an empty response
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            ApiResponse::Empty => Value::Bool(true),
            ApiResponse::Json(value) => value,
        }
    }

    /// Value of `@attributes.stat`
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.attributes()?.get("stat")?.as_str()
    }

    /// True when the document reports a failure status
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.status() == Some(STATUS_FAIL)
    }

    /// Value of `@attributes.err_code`, accepting both numbers and numeric strings
    #[must_use]
    pub fn error_code(&self) -> Option<i64> {
        match self.attributes()?.get("err_code")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Error message of a failure document (`err`)
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self.as_json()?.get("err")? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// True when Pardot rejected the session key or user key
    #[must_use]
    pub fn is_invalid_session(&self) -> bool {
        self.is_failure() && self.error_code() == Some(INVALID_API_KEY_ERR_CODE)
    }

    /// Turns a failure document into [`AppError::Api`], passing anything else through
    pub fn into_result(self) -> Result<Self, AppError> {
        if self.is_failure() {
            return Err(self.to_api_error());
        }
        Ok(self)
    }

    /// Builds the [`AppError::Api`] describing this document
    #[must_use]
    pub fn to_api_error(&self) -> AppError {
        AppError::Api {
            code: self.error_code(),
            message: self
                .error_message()
                .unwrap_or_else(|| "unknown error".to_string()),
        }
    }

    fn attributes(&self) -> Option<&Value> {
        self.as_json()?.get(ATTRIBUTES_KEY)
    }
}

impl From<Value> for ApiResponse {
    fn from(value: Value) -> Self {
        ApiResponse::Json(value)
    }
}

/// Successful body of the login handshake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session key to send as `api_key` with every authenticated call
    pub api_key: String,
}

impl LoginResponse {
    /// Extracts the session key from a login response
    ///
    /// # Errors
    /// * [`AppError::Api`] when Pardot reports a failure
    /// * [`AppError::Transport`] when the document is empty or carries no session key
    pub fn from_response(uri: &str, response: ApiResponse) -> Result<Self, AppError> {
        let response = response.into_result()?;
        let value = match response {
            ApiResponse::Json(value) => value,
            ApiResponse::Empty => {
                return Err(AppError::transport(
                    uri,
                    "malformed response: empty login response",
                    None,
                ));
            }
        };
        let login: LoginResponse = serde_json::from_value(value).map_err(|e| {
            AppError::transport(uri, format!("malformed response: {e}"), None)
        })?;
        if login.api_key.is_empty() {
            return Err(AppError::transport(
                uri,
                "malformed response: empty api_key",
                None,
            ));
        }
        Ok(login)
    }
}
