use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{requests::SearchProducts, response::ProductResponse},
};
use async_trait::async_trait;
use shared::{
    config::AppConfig,
    errors::ServiceError,
    localization::DynLocalizer,
    pagination::{PaginatedList, paginate},
    response::{ErrorCode, ResponseEnvelope, ResponseHelper, SuccessCode},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub localizer: DynLocalizer,
    pub config: AppConfig,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, localizer: DynLocalizer, config: AppConfig) -> Self {
        Self {
            query,
            localizer,
            config,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &SearchProducts,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope<PaginatedList<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 {
            req.page_size.min(self.config.max_page_size)
        } else {
            self.config.default_page_size
        };

        let source = self.query.find_all(req);
        let products = match paginate(source.as_ref(), page, page_size, cancel).await {
            Ok(list) => list,
            Err(e) => {
                error!("❌ Failed to fetch products page {page}: {e:?}");
                return Err(e);
            }
        };

        info!(
            "✅ Found {} products (total: {})",
            products.items.len(),
            products.total_items
        );

        Ok(ResponseHelper::success_with_data(
            SuccessCode::GetSuccess,
            "products",
            self.localizer.as_ref(),
            products.map(ProductResponse::from),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ResponseEnvelope<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let product = self.query.find_by_id(id).await.map_err(|e| {
            error!("❌ Database error while finding product ID {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let Some(product) = product else {
            info!("❌ Product not found with ID: {id}");
            return Ok(ResponseHelper::error_response(
                ErrorCode::NotFound,
                "product",
                self.localizer.as_ref(),
            ));
        };

        info!("✅ Product retrieved: '{}' (ID: {id})", product.name);

        Ok(ResponseHelper::success_with_data(
            SuccessCode::GetSuccess,
            "product",
            self.localizer.as_ref(),
            ProductResponse::from(product),
        ))
    }
}
