use crate::{
    domain::requests::{CreateProductRequest, SearchProducts},
    model::Product,
};
use async_trait::async_trait;
use shared::{errors::RepositoryError, pagination::PageSource};
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Deferred, ordered view over the products matching `req.search`;
    /// the pagination engine resolves count and slice against it.
    fn find_all(&self, req: &SearchProducts) -> Arc<dyn PageSource<Product>>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    /// `true` when no product carries `name`; callers proceed on `true`
    /// and report a duplicate on `false`.
    async fn is_unique_name(&self, name: &str) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
}
