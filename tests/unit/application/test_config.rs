use pardot_client::application::config::{Config, Credentials, RestApiConfig};
use pardot_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use pardot_client::error::AppError;
use std::env;

#[test]
fn test_with_credentials_uses_defaults() {
    let config = Config::with_credentials("jane@example.com", "secret", "uk");

    assert_eq!(config.credentials.email, "jane@example.com");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.credentials.user_key, "uk");
    assert!(config.credentials.api_key.is_none());
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_builders_override_fields() {
    let config = Config::with_credentials("jane@example.com", "secret", "uk")
        .with_base_url("http://localhost:1234/api")
        .with_timeout(3)
        .with_api_key("cached");

    assert_eq!(config.rest_api.base_url, "http://localhost:1234/api");
    assert_eq!(config.rest_api.timeout, 3);
    assert_eq!(config.credentials.api_key.as_deref(), Some("cached"));
}

#[test]
fn test_rest_api_default() {
    let rest = RestApiConfig::default();
    assert_eq!(rest.base_url, "https://pi.pardot.com/api");
    assert_eq!(rest.timeout, 30);
}

#[test]
fn test_validate_for_login_reports_first_missing_field() {
    let mut credentials = Credentials::default();
    match credentials.validate_for_login() {
        Err(AppError::Config(field)) => assert_eq!(field, "email"),
        other => panic!("Unexpected result: {:?}", other),
    }

    credentials.email = "jane@example.com".to_string();
    match credentials.validate_for_login() {
        Err(AppError::Config(field)) => assert_eq!(field, "password"),
        other => panic!("Unexpected result: {:?}", other),
    }

    credentials.password = "secret".to_string();
    match credentials.validate_for_login() {
        Err(AppError::Config(field)) => assert_eq!(field, "user_key"),
        other => panic!("Unexpected result: {:?}", other),
    }

    credentials.user_key = "uk".to_string();
    assert!(credentials.validate_for_login().is_ok());
}

#[test]
fn test_validate_for_request_only_needs_user_key() {
    let credentials = Credentials {
        user_key: "uk".to_string(),
        ..Default::default()
    };
    assert!(credentials.validate_for_request().is_ok());

    let err = Credentials::default().validate_for_request().unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_config_serialization() {
    let config = Config::with_credentials("jane@example.com", "secret", "uk").with_api_key("k");

    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(back.credentials.email, "jane@example.com");
    assert_eq!(back.credentials.api_key.as_deref(), Some("k"));
    assert_eq!(back.rest_api.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_config_new_reads_environment() {
    unsafe {
        env::set_var("PARDOT_EMAIL", "env@example.com");
        env::set_var("PARDOT_PASSWORD", "env-secret");
        env::set_var("PARDOT_USER_KEY", "env-uk");
        env::set_var("PARDOT_API_KEY", "");
        env::set_var("PARDOT_BASE_URL", "http://localhost:9/api");
        env::set_var("PARDOT_REST_TIMEOUT", "7");
    }

    let config = Config::new();

    assert_eq!(config.credentials.email, "env@example.com");
    assert_eq!(config.credentials.password, "env-secret");
    assert_eq!(config.credentials.user_key, "env-uk");
    assert!(config.credentials.api_key.is_none());
    assert_eq!(config.rest_api.base_url, "http://localhost:9/api");
    assert_eq!(config.rest_api.timeout, 7);

    unsafe {
        env::remove_var("PARDOT_EMAIL");
        env::remove_var("PARDOT_PASSWORD");
        env::remove_var("PARDOT_USER_KEY");
        env::remove_var("PARDOT_API_KEY");
        env::remove_var("PARDOT_BASE_URL");
        env::remove_var("PARDOT_REST_TIMEOUT");
    }
}
