use crate::{
    abstract_trait::{
        DynOrderCommandService, DynProductCommandService, DynProductQueryService, DynUnitOfWork,
        DynUserQueryService,
    },
    dispatch::Dispatcher,
    service::{OrderCommandService, ProductCommandService, ProductQueryService, UserQueryService},
};
use shared::{config::AppConfig, localization::DynLocalizer};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_command: DynProductCommandService,
    pub product_query: DynProductQueryService,
    pub order_command: DynOrderCommandService,
    pub user_query: DynUserQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_command", &"ProductCommandService")
            .field("product_query", &"ProductQueryService")
            .field("order_command", &"OrderCommandService")
            .field("user_query", &"UserQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(uow: DynUnitOfWork, localizer: DynLocalizer, config: AppConfig) -> Self {
        let product_command = Arc::new(ProductCommandService::new(uow.clone(), localizer.clone()));
        let product_query = Arc::new(ProductQueryService::new(
            uow.product_query(),
            localizer.clone(),
            config.clone(),
        ));
        let order_command = Arc::new(OrderCommandService::new(uow.clone(), localizer.clone()));
        let user_query = Arc::new(UserQueryService::new(uow.user_query(), localizer, config));

        Self {
            product_command,
            product_query,
            order_command,
            user_query,
        }
    }

    pub fn into_dispatcher(self) -> Dispatcher {
        Dispatcher {
            product_command: self.product_command,
            product_query: self.product_query,
            order_command: self.order_command,
            user_query: self.user_query,
        }
    }
}
