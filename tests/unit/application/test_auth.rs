use crate::common::{
    EMAIL, PASSWORD, USER_KEY, create_test_config, create_test_config_with_session, fail_body,
    login_ok_body,
};
use mockito::{Matcher, Server};
use pardot_client::application::auth::{Auth, Session};
use pardot_client::error::AppError;
use pardot_client::model::requests::Params;
use reqwest::Client;
use std::sync::Arc;

fn create_auth(config: pardot_client::config::Config) -> Auth {
    Auth::new(Arc::new(config), Client::new())
}

#[tokio::test]
async fn test_login_sends_credentials_and_stores_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/login/version/3")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("email".into(), EMAIL.into()),
            Matcher::UrlEncoded("password".into(), PASSWORD.into()),
            Matcher::UrlEncoded("user_key".into(), USER_KEY.into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
        ]))
        .with_status(200)
        .with_body(login_ok_body("fresh_key"))
        .expect(1)
        .create_async()
        .await;

    let auth = create_auth(create_test_config(&server.url()));
    assert!(auth.current_session().await.is_none());

    let session = auth.login().await.expect("login should succeed");
    assert_eq!(session.api_key, "fresh_key");
    assert_eq!(session.user_key, USER_KEY);

    let stored = auth.current_session().await.expect("session stored");
    assert_eq!(stored.api_key, "fresh_key");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_is_not_authenticated() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/login/version/3")
        .match_body(Matcher::Regex("api_key=".into()))
        .expect(0)
        .create_async()
        .await;
    let _login = server
        .mock("POST", "/login/version/3")
        .with_status(200)
        .with_body(login_ok_body("new_key"))
        .create_async()
        .await;

    let auth = create_auth(create_test_config_with_session(&server.url(), "old_key"));
    let session = auth.login().await.expect("login should succeed");

    assert_eq!(session.api_key, "new_key");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_failure_is_api_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/login/version/3")
        .with_status(200)
        .with_body(fail_body(15, "Login failed"))
        .expect(1)
        .create_async()
        .await;

    let auth = create_auth(create_test_config(&server.url()));
    let err = auth.login().await.unwrap_err();

    match err {
        AppError::Api { code, message } => {
            assert_eq!(code, Some(15));
            assert_eq!(message, "Login failed");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
    assert!(auth.current_session().await.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_requires_credentials_before_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut config = create_test_config(&server.url());
    config.credentials.email = String::new();
    let err = create_auth(config).login().await.unwrap_err();
    assert_eq!(err.to_string(), "invalid config: `email` is required");

    let mut config = create_test_config(&server.url());
    config.credentials.password = String::new();
    let err = create_auth(config).login().await.unwrap_err();
    assert_eq!(err.to_string(), "invalid config: `password` is required");

    let mut config = create_test_config(&server.url());
    config.credentials.user_key = String::new();
    let err = create_auth(config).login().await.unwrap_err();
    assert_eq!(err.to_string(), "invalid config: `user_key` is required");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_without_api_key_is_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/login/version/3")
        .with_status(200)
        .with_body(r#"{"@attributes":{"stat":"ok","version":1}}"#)
        .create_async()
        .await;

    let auth = create_auth(create_test_config(&server.url()));
    let err = auth.login().await.unwrap_err();
    assert!(err.is_transport_error());
    assert!(auth.current_session().await.is_none());
}

#[tokio::test]
async fn test_seeded_session_needs_no_login() {
    let server = Server::new_async().await;
    let auth = create_auth(create_test_config_with_session(&server.url(), "seeded"));

    let session = auth.get_session().await.expect("seeded session");
    assert_eq!(session.api_key, "seeded");
    assert_eq!(session.user_key, USER_KEY);
}

#[tokio::test]
async fn test_empty_seeded_key_is_ignored() {
    let server = Server::new_async().await;
    let auth = create_auth(create_test_config_with_session(&server.url(), ""));
    assert!(auth.current_session().await.is_none());
}

#[tokio::test]
async fn test_get_session_logs_in_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/login/version/3")
        .with_status(200)
        .with_body(login_ok_body("fresh_key"))
        .expect(1)
        .create_async()
        .await;

    let auth = create_auth(create_test_config(&server.url()));
    let first = auth.get_session().await.unwrap();
    let second = auth.get_session().await.unwrap();

    assert_eq!(first.api_key, second.api_key);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_session() {
    let server = Server::new_async().await;
    let auth = create_auth(create_test_config_with_session(&server.url(), "seeded"));
    assert!(auth.current_session().await.is_some());

    auth.logout().await;
    assert!(auth.current_session().await.is_none());
}

#[test]
fn test_session_authenticate_copies_params() {
    let session = Session::new("key", "user");
    let mut params = Params::new();
    params.insert("fields".to_string(), "email".to_string());

    let authenticated = session.authenticate(&params);

    assert_eq!(authenticated["api_key"], "key");
    assert_eq!(authenticated["user_key"], "user");
    assert_eq!(authenticated["fields"], "email");
    assert!(!params.contains_key("api_key"));
}

#[test]
fn test_session_authenticate_overrides_caller_keys() {
    let session = Session::new("key", "user");
    let mut params = Params::new();
    params.insert("api_key".to_string(), "forged".to_string());

    let authenticated = session.authenticate(&params);
    assert_eq!(authenticated["api_key"], "key");
}

#[test]
fn test_session_age_is_not_negative() {
    let session = Session::new("key", "user");
    assert!(session.age().num_milliseconds() >= 0);
}
