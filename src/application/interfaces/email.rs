use crate::error::AppError;
use crate::model::requests::{IdField, Params};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the email service
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Returns the data for the specified email
    async fn read_email(&self, id: &str, params: Option<Params>)
    -> Result<ApiResponse, AppError>;

    /// Sends an email to a prospect or a list
    ///
    /// # Arguments
    /// * `id_field` - `ProspectId` or `ProspectEmail`; `None` sends to the lists given in `params`
    /// * `id` - Id or email address of the prospect, according to `id_field`
    /// * `params` - Email content or template and, for list sends, `list_ids[]`
    async fn send_email(
        &self,
        id_field: Option<IdField>,
        id: Option<&str>,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError>;
}
