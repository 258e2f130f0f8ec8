use crate::{domain::requests::UpdateOrderRequest, model::Order};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn update_order(&self, req: &UpdateOrderRequest) -> Result<Order, RepositoryError>;
}
