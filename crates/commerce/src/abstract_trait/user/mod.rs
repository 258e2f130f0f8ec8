mod repository;
mod service;

pub use self::repository::{DynUserQueryRepository, UserQueryRepositoryTrait};
pub use self::service::{DynUserQueryService, UserQueryServiceTrait};
