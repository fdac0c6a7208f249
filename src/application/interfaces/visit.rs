use crate::error::AppError;
use crate::model::requests::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the visit service
#[async_trait]
pub trait VisitService: Send + Sync {
    /// Returns the visits matching the criteria parameters
    ///
    /// `params` must include at least one of `ids`, `visitor_ids` or `prospect_ids`.
    async fn query_visits(&self, params: Params) -> Result<ApiResponse, AppError>;

    /// Returns the data for the specified visit
    async fn read_visit(&self, id: &str, params: Option<Params>) -> Result<ApiResponse, AppError>;
}
