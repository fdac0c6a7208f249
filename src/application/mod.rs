/// Authentication and session key management
pub mod auth;
/// Client exposing the operation table and the per object services
pub mod client;
/// Application configuration module
pub mod config;
/// Per object service interfaces
pub mod interfaces;
