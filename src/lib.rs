/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # Pardot Client
//!
//! An async client for the Pardot API version 3.
//!
//! Every call to the API is a `POST` to
//! `https://pi.pardot.com/api/<object>/version/3[/do/<operation>][/<id_field>/<id>]`
//! with a form encoded body. The client takes care of:
//!
//! - Logging in with the account email, password and user key
//! - Injecting the session key (`api_key`) and `user_key` into every call
//! - Logging in again, once, when the API reports an invalid or expired key
//! - Surfacing configuration, transport and API failures as distinct errors
//!
//! Responses are returned verbatim as [`model::responses::ApiResponse`]; calls
//! that return no payload come back as [`ApiResponse::Empty`](model::responses::ApiResponse::Empty).
//!
//! ## Example
//!
//! ```ignore
//! use pardot_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!
//!     let client = Client::new(Config::new())?;
//!     let prospect = client
//!         .read_prospect(IdField::Email, "jane@example.com", None)
//!         .await?;
//!     info!("{}", prospect.to_value());
//!     Ok(())
//! }
//! ```

/// Application layer: configuration, authentication, client and service interfaces
pub mod application;
/// Library wide constants
pub mod constants;
/// Error types
pub mod error;
/// Request, response and transport models
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Utility functions (environment, logging)
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
