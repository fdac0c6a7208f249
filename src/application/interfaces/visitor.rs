use crate::error::AppError;
use crate::model::requests::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the visitor service
#[async_trait]
pub trait VisitorService: Send + Sync {
    /// Returns the visitors matching the criteria parameters
    async fn query_visitors(&self, params: Option<Params>) -> Result<ApiResponse, AppError>;

    /// Assigns or reassigns the visitor to a prospect
    ///
    /// `params` must include exactly one of `prospect_id` or `prospect_email`.
    async fn assign_visitor(&self, id: &str, params: Params) -> Result<ApiResponse, AppError>;

    /// Returns the data for the specified visitor
    async fn read_visitor(
        &self,
        id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;
}
