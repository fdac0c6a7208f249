use crate::error::AppError;
use crate::model::requests::{IdField, Params};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the user service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Returns the users matching the criteria parameters
    async fn query_users(&self, params: Option<Params>) -> Result<ApiResponse, AppError>;

    /// Returns the data for the user addressed by `Id` or `Email`
    async fn read_user(
        &self,
        id_field: IdField,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;
}
