use crate::domain::{requests::UpdateOrderRequest, response::OrderResponse};
use async_trait::async_trait;
use shared::{errors::ServiceError, response::ResponseEnvelope};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn update_order(
        &self,
        req: &UpdateOrderRequest,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope<OrderResponse>, ServiceError>;
}
