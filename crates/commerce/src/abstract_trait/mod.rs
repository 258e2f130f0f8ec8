mod category;
mod order;
mod product;
mod unit_of_work;
mod user;

pub use self::category::{CategoryQueryRepositoryTrait, DynCategoryQueryRepository};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    OrderCommandRepositoryTrait, OrderCommandServiceTrait, OrderQueryRepositoryTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::unit_of_work::{DynUnitOfWork, UnitOfWork};
pub use self::user::{
    DynUserQueryRepository, DynUserQueryService, UserQueryRepositoryTrait, UserQueryServiceTrait,
};
