use crate::domain::{requests::SearchUsers, response::UserResponse};
use async_trait::async_trait;
use shared::{
    errors::ServiceError,
    pagination::PaginatedList,
    response::ResponseEnvelope,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(
        &self,
        req: &SearchUsers,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope<PaginatedList<UserResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ResponseEnvelope<UserResponse>, ServiceError>;
}
