use crate::abstract_trait::{
    DynCategoryQueryRepository, DynOrderCommandRepository, DynOrderQueryRepository,
    DynProductCommandRepository, DynProductQueryRepository, DynUserQueryRepository,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynUnitOfWork = Arc<dyn UnitOfWork + Send + Sync>;

/// Transactional boundary over the repository set. The core never opens
/// connections or transactions itself; `commit` makes the writes staged
/// through the command repositories durable as one unit.
#[async_trait]
pub trait UnitOfWork {
    fn product_query(&self) -> DynProductQueryRepository;
    fn product_command(&self) -> DynProductCommandRepository;
    fn category_query(&self) -> DynCategoryQueryRepository;
    fn order_query(&self) -> DynOrderQueryRepository;
    fn order_command(&self) -> DynOrderCommandRepository;
    fn user_query(&self) -> DynUserQueryRepository;
    async fn commit(&self) -> Result<(), RepositoryError>;
}
