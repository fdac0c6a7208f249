use crate::error::AppError;
use crate::model::requests::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the prospect account service
#[async_trait]
pub trait ProspectAccountService: Send + Sync {
    /// Returns the prospect accounts matching the criteria parameters
    async fn query_prospect_accounts(
        &self,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Creates a new prospect account
    async fn create_prospect_account(
        &self,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Returns the field metadata for prospect accounts: available fields,
    /// their types, whether they are required and their options
    async fn describe_prospect_account(
        &self,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Returns the data for the specified prospect account
    async fn read_prospect_account(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Updates the data for the specified prospect account
    async fn update_prospect_account(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;
}
