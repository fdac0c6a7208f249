/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Client for the Pardot API
//!
//! [`Client`] exposes one method per operation verb (`query`, `read`, ...) and
//! implements the per object services (`ProspectService`, `VisitorService`, ...)
//! on top of them. Authentication is handled by the inner [`HttpClient`].
//!
//! # Example
//! ```ignore
//! use pardot_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let visitors = client.query_visitors(None).await?;
//! let deleted = client.delete_prospect(IdField::Id, "42", None).await?;
//! assert!(deleted.is_empty());
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::email::EmailService;
use crate::application::interfaces::list::ListService;
use crate::application::interfaces::opportunity::OpportunityService;
use crate::application::interfaces::prospect::ProspectService;
use crate::application::interfaces::prospect_account::ProspectAccountService;
use crate::application::interfaces::user::UserService;
use crate::application::interfaces::visit::VisitService;
use crate::application::interfaces::visitor::VisitorService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ApiRequest, IdField, ObjectKind, Operation, Params};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Client for the Pardot API with automatic authentication
///
/// Cloning is cheap; clones share the same session key.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a new client without logging in
    ///
    /// The first call logs in, unless the configuration carries a session key.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a new client and logs in immediately
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the configuration is incomplete or login fails
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        client.http_client.login().await?;
        Ok(client)
    }

    /// Gets the current session, logging in if there is none
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.http_client.get_session().await
    }

    /// Logs in, replacing any cached session
    pub async fn login(&self) -> Result<Session, AppError> {
        self.http_client.login().await
    }

    /// Drops the cached session; the next call logs in again
    pub async fn logout(&self) {
        self.http_client.logout().await
    }

    /// Gets a reference to the underlying HTTP client
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Performs an operation on an object
    ///
    /// Every verb method below is this call with the operation fixed.
    pub async fn call(
        &self,
        object: ObjectKind,
        operation: Operation,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        debug!("{} {}", operation, object);
        let request = ApiRequest::new(object.as_str())
            .with_operation(operation)
            .with_optional_id(id_field.as_ref().map(IdField::as_str), id)
            .with_params(params.unwrap_or_default());
        self.http_client.request(&request).await
    }

    /// Returns the records matching the criteria parameters
    pub async fn query(
        &self,
        object: ObjectKind,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Query, None, None, params).await
    }

    /// Assigns a record
    pub async fn assign(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Assign, id_field, id, params)
            .await
    }

    /// Unassigns a record
    pub async fn unassign(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Unassign, id_field, id, params)
            .await
    }

    /// Creates a record
    pub async fn create(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Create, id_field, id, params)
            .await
    }

    /// Returns field metadata
    pub async fn describe(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Describe, id_field, id, params)
            .await
    }

    /// Reads a record
    pub async fn read(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Read, id_field, id, params).await
    }

    /// Updates a record
    pub async fn update(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Update, id_field, id, params)
            .await
    }

    /// Updates a record or creates it
    pub async fn upsert(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Upsert, id_field, id, params)
            .await
    }

    /// Deletes a record
    pub async fn delete(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Delete, id_field, id, params)
            .await
    }

    /// Restores a deleted record
    pub async fn undelete(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Undelete, id_field, id, params)
            .await
    }

    /// Sends a record (emails)
    pub async fn send(
        &self,
        object: ObjectKind,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.call(object, Operation::Send, id_field, id, params).await
    }
}

#[async_trait]
impl EmailService for Client {
    async fn read_email(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.read(ObjectKind::Email, Some(IdField::Id), Some(id), params)
            .await
    }

    async fn send_email(
        &self,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.send(ObjectKind::Email, id_field, id, params).await
    }
}

#[async_trait]
impl ListService for Client {
    async fn query_lists(&self, params: Option<Params>) -> Result<ApiResponse, AppError> {
        self.query(ObjectKind::List, params).await
    }

    async fn read_list(&self, id: &str, params: Option<Params>) -> Result<ApiResponse, AppError> {
        self.read(ObjectKind::List, Some(IdField::Id), Some(id), params)
            .await
    }
}

#[async_trait]
impl OpportunityService for Client {
    async fn query_opportunities(
        &self,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.query(ObjectKind::Opportunity, params).await
    }

    async fn create_opportunity(
        &self,
        id_field: IdField,
        id: &str,
        params: Params,
    ) -> Result<ApiResponse, AppError> {
        self.create(
            ObjectKind::Opportunity,
            Some(id_field),
            Some(id),
            Some(params),
        )
        .await
    }

    async fn read_opportunity(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.read(ObjectKind::Opportunity, Some(IdField::Id), Some(id), params)
            .await
    }

    async fn update_opportunity(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.update(ObjectKind::Opportunity, Some(IdField::Id), Some(id), params)
            .await
    }

    async fn delete_opportunity(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.delete(ObjectKind::Opportunity, Some(IdField::Id), Some(id), params)
            .await
    }

    async fn undelete_opportunity(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.undelete(ObjectKind::Opportunity, Some(IdField::Id), Some(id), params)
            .await
    }
}

#[async_trait]
impl ProspectService for Client {
    async fn query_prospects(&self, params: Option<Params>) -> Result<ApiResponse, AppError> {
        self.query(ObjectKind::Prospect, params).await
    }

    async fn assign_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Params,
    ) -> Result<ApiResponse, AppError> {
        self.assign(ObjectKind::Prospect, Some(id_field), Some(id), Some(params))
            .await
    }

    async fn unassign_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.unassign(ObjectKind::Prospect, Some(id_field), Some(id), params)
            .await
    }

    async fn create_prospect(
        &self,
        email: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.create(ObjectKind::Prospect, Some(IdField::Email), Some(email), params)
            .await
    }

    async fn read_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.read(ObjectKind::Prospect, Some(id_field), Some(id), params)
            .await
    }

    async fn update_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.update(ObjectKind::Prospect, Some(id_field), Some(id), params)
            .await
    }

    async fn upsert_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.upsert(ObjectKind::Prospect, Some(id_field), Some(id), params)
            .await
    }

    async fn delete_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.delete(ObjectKind::Prospect, Some(id_field), Some(id), params)
            .await
    }
}

#[async_trait]
impl ProspectAccountService for Client {
    async fn query_prospect_accounts(
        &self,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.query(ObjectKind::ProspectAccount, params).await
    }

    async fn create_prospect_account(
        &self,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.create(ObjectKind::ProspectAccount, None, None, params)
            .await
    }

    async fn describe_prospect_account(
        &self,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.describe(ObjectKind::ProspectAccount, None, None, params)
            .await
    }

    async fn read_prospect_account(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.read(
            ObjectKind::ProspectAccount,
            Some(IdField::Id),
            Some(id),
            params,
        )
        .await
    }

    async fn update_prospect_account(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.update(
            ObjectKind::ProspectAccount,
            Some(IdField::Id),
            Some(id),
            params,
        )
        .await
    }
}

#[async_trait]
impl UserService for Client {
    async fn query_users(&self, params: Option<Params>) -> Result<ApiResponse, AppError> {
        self.query(ObjectKind::User, params).await
    }

    async fn read_user(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.read(ObjectKind::User, Some(id_field), Some(id), params)
            .await
    }
}

#[async_trait]
impl VisitService for Client {
    async fn query_visits(&self, params: Params) -> Result<ApiResponse, AppError> {
        self.query(ObjectKind::Visit, Some(params)).await
    }

    async fn read_visit(&self, id: &str, params: Option<Params>) -> Result<ApiResponse, AppError> {
        self.read(ObjectKind::Visit, Some(IdField::Id), Some(id), params)
            .await
    }
}

#[async_trait]
impl VisitorService for Client {
    async fn query_visitors(&self, params: Option<Params>) -> Result<ApiResponse, AppError> {
        self.query(ObjectKind::Visitor, params).await
    }

    async fn assign_visitor(&self, id: &str, params: Params) -> Result<ApiResponse, AppError> {
        self.assign(ObjectKind::Visitor, Some(IdField::Id), Some(id), Some(params))
            .await
    }

    async fn read_visitor(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.read(ObjectKind::Visitor, Some(IdField::Id), Some(id), params)
            .await
    }
}
