#![allow(dead_code)]

// Common utilities for the unit tests

use pardot_client::application::config::{Config, Credentials, RestApiConfig};

pub const EMAIL: &str = "jane@example.com";
pub const PASSWORD: &str = "secret";
pub const USER_KEY: &str = "test_user_key";

/// Creates a test config pointing at the mock server
pub fn create_test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            email: EMAIL.to_string(),
            password: PASSWORD.to_string(),
            user_key: USER_KEY.to_string(),
            api_key: None,
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            timeout: 5,
        },
    }
}

/// Same as `create_test_config` with a session key from a previous login
pub fn create_test_config_with_session(server_url: &str, api_key: &str) -> Config {
    create_test_config(server_url).with_api_key(api_key)
}

pub fn login_ok_body(api_key: &str) -> String {
    format!(r#"{{"@attributes":{{"stat":"ok","version":1}},"api_key":"{api_key}"}}"#)
}

pub fn fail_body(err_code: i64, message: &str) -> String {
    format!(
        r#"{{"@attributes":{{"stat":"fail","version":1,"err_code":{err_code}}},"err":"{message}"}}"#
    )
}

pub fn invalid_key_body() -> String {
    fail_body(1, "Invalid API key or user key")
}

pub fn prospect_body(id: u64) -> String {
    format!(
        r#"{{"@attributes":{{"stat":"ok","version":1}},"prospect":{{"id":{id},"email":"jane@example.com"}}}}"#
    )
}
