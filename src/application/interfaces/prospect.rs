use crate::error::AppError;
use crate::model::requests::{IdField, Params};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the prospect service
///
/// Every addressed call takes an `id_field` of `Id` or `Email` and the matching value.
#[async_trait]
pub trait ProspectService: Send + Sync {
    /// Returns the prospects matching the criteria parameters
    async fn query_prospects(&self, params: Option<Params>) -> Result<ApiResponse, AppError>;

    /// Assigns or reassigns the prospect to a user or group
    ///
    /// `params` must include exactly one of `user_email`, `user_id` or `group_id`.
    async fn assign_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Params,
    ) -> Result<ApiResponse, AppError>;

    /// Unassigns the prospect
    async fn unassign_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Creates a new prospect with the given email address
    async fn create_prospect(
        &self,
        email: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Returns the data for the prospect, including campaign assignment,
    /// profile criteria, visitor activities, list subscriptions and custom fields
    async fn read_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Updates the provided data for the prospect
    async fn update_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Updates the prospect or creates it if it does not exist
    async fn upsert_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;

    /// Deletes the prospect. Pardot answers with an empty body on success.
    async fn delete_prospect(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;
}
