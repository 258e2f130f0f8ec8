use crate::domain::{
    requests::{CreateProductRequest, SearchProducts},
    response::ProductResponse,
};
use async_trait::async_trait;
use shared::{
    errors::ServiceError,
    pagination::PaginatedList,
    response::ResponseEnvelope,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        req: &SearchProducts,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope<PaginatedList<ProductResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<ResponseEnvelope<ProductResponse>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope<ProductResponse>, ServiceError>;
}
