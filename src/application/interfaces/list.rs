use crate::error::AppError;
use crate::model::requests::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the list service
#[async_trait]
pub trait ListService: Send + Sync {
    /// Returns the lists matching the criteria parameters
    async fn query_lists(&self, params: Option<Params>) -> Result<ApiResponse, AppError>;

    /// Returns the data for the specified list
    async fn read_list(&self, id: &str, params: Option<Params>) -> Result<ApiResponse, AppError>;
}
