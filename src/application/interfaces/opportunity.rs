use crate::error::AppError;
use crate::model::requests::{IdField, Params};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the opportunity service
#[async_trait]
pub trait OpportunityService: Send + Sync {
    /// Returns the opportunities matching the criteria parameters
    async fn query_opportunities(&self, params: Option<Params>)
    -> Result<ApiResponse, AppError>;

    /// Creates a new opportunity for a prospect
    ///
    /// # Arguments
    /// * `id_field` - `ProspectId` or `ProspectEmail`
    /// * `id` - Id or email address of the prospect, according to `id_field`
    /// * `params` - Must include `name`, `value` and `probability`
    async fn create_opportunity(
        &self,
        id_field: IdField,
        id: &str,
        params: Params,
    ) -> Result<ApiResponse, AppError>;

    /// Returns the data for the specified opportunity, including campaign
    /// assignment and associated visitor activities
    async fn read_opportunity(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Updates the provided data for the specified opportunity
    async fn update_opportunity(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Deletes the specified opportunity. Pardot answers with an empty body on success.
    async fn delete_opportunity(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Restores the specified deleted opportunity
    async fn undelete_opportunity(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;
}
