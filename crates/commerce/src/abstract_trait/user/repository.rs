use crate::{domain::requests::SearchUsers, model::User};
use async_trait::async_trait;
use shared::{errors::RepositoryError, pagination::PageSource};
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    fn find_all(&self, req: &SearchUsers) -> Arc<dyn PageSource<User>>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
}
