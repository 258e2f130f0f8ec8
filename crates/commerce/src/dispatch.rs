use crate::{
    abstract_trait::{
        DynOrderCommandService, DynProductCommandService, DynProductQueryService,
        DynUserQueryService,
    },
    domain::{
        requests::{CreateProductRequest, SearchProducts, SearchUsers, UpdateOrderRequest},
        response::{OrderResponse, ProductResponse, UserResponse},
    },
};
use shared::{errors::ServiceError, pagination::PaginatedList, response::ResponseEnvelope};
use tokio_util::sync::CancellationToken;

/// Every command and query the backend accepts, as one tagged union.
#[derive(Debug, Clone)]
pub enum AppRequest {
    CreateProduct(CreateProductRequest),
    FindAllProducts(SearchProducts),
    FindProductById(i32),
    UpdateOrder(UpdateOrderRequest),
    FindAllUsers(SearchUsers),
    FindUserById(i32),
}

#[derive(Debug, Clone)]
pub enum AppResponse {
    Product(ResponseEnvelope<ProductResponse>),
    Products(ResponseEnvelope<PaginatedList<ProductResponse>>),
    Order(ResponseEnvelope<OrderResponse>),
    User(ResponseEnvelope<UserResponse>),
    Users(ResponseEnvelope<PaginatedList<UserResponse>>),
}

/// Explicit request-to-handler registry: each variant resolves to its
/// handler in one match, no reflection or runtime discovery.
#[derive(Clone)]
pub struct Dispatcher {
    pub product_command: DynProductCommandService,
    pub product_query: DynProductQueryService,
    pub order_command: DynOrderCommandService,
    pub user_query: DynUserQueryService,
}

impl Dispatcher {
    pub async fn dispatch(
        &self,
        request: AppRequest,
        cancel: &CancellationToken,
    ) -> Result<AppResponse, ServiceError> {
        match request {
            AppRequest::CreateProduct(req) => Ok(AppResponse::Product(
                self.product_command.create_product(&req, cancel).await?,
            )),
            AppRequest::FindAllProducts(req) => Ok(AppResponse::Products(
                self.product_query.find_all(&req, cancel).await?,
            )),
            AppRequest::FindProductById(id) => Ok(AppResponse::Product(
                self.product_query.find_by_id(id).await?,
            )),
            AppRequest::UpdateOrder(req) => Ok(AppResponse::Order(
                self.order_command.update_order(&req, cancel).await?,
            )),
            AppRequest::FindAllUsers(req) => Ok(AppResponse::Users(
                self.user_query.find_all(&req, cancel).await?,
            )),
            AppRequest::FindUserById(id) => {
                Ok(AppResponse::User(self.user_query.find_by_id(id).await?))
            }
        }
    }
}
