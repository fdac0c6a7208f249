/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # Pardot Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Pardot Client library.
//!
//! ## Usage
//!
//! ```rust
//! use pardot_client::prelude::*;
//!
//! let config = Config::with_credentials("jane@example.com", "secret", "user-key");
//! let client = Client::new(config).expect("http client");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Pardot API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, AUTHENTICATION AND TRANSPORT
// ============================================================================

/// Client exposing every operation
pub use crate::application::client::Client;

/// Authentication handler and session
pub use crate::application::auth::{Auth, Session};

/// Authenticated HTTP client and transport helpers
pub use crate::model::http::{HttpClient, build_form, build_uri, make_http_request};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::email::EmailService;
pub use crate::application::interfaces::list::ListService;
pub use crate::application::interfaces::opportunity::OpportunityService;
pub use crate::application::interfaces::prospect::ProspectService;
pub use crate::application::interfaces::prospect_account::ProspectAccountService;
pub use crate::application::interfaces::user::UserService;
pub use crate::application::interfaces::visit::VisitService;
pub use crate::application::interfaces::visitor::VisitorService;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{ApiRequest, IdField, ObjectKind, Operation, Params};

/// Response models
pub use crate::model::responses::{ApiResponse, LoginResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
