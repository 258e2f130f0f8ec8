use crate::{
    abstract_trait::{DynUnitOfWork, ProductCommandServiceTrait},
    domain::{requests::CreateProductRequest, response::ProductResponse},
};
use async_trait::async_trait;
use shared::{
    errors::ServiceError,
    localization::DynLocalizer,
    response::{ErrorCode, ResponseEnvelope, ResponseHelper, SuccessCode, field_errors_from},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct ProductCommandService {
    pub uow: DynUnitOfWork,
    pub localizer: DynLocalizer,
}

impl ProductCommandService {
    pub fn new(uow: DynUnitOfWork, localizer: DynLocalizer) -> Self {
        Self { uow, localizer }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope<ProductResponse>, ServiceError> {
        info!("📦 Creating product '{}'", req.name);

        if let Err(validation) = req.validate() {
            info!("❌ Product payload rejected by validation");
            return Ok(ResponseHelper::validation_error_response(
                ErrorCode::CreateError,
                field_errors_from(&validation),
                self.localizer.as_ref(),
                "product",
            ));
        }

        if cancel.is_cancelled() {
            return Err(ServiceError::Cancelled);
        }

        let unique = self
            .uow
            .product_query()
            .is_unique_name(&req.name)
            .await
            .map_err(|e| {
                error!("❌ Unique-name check failed for '{}': {e:?}", req.name);
                ServiceError::Repo(e)
            })?;
        if !unique {
            info!("❌ Product '{}' already exists", req.name);
            return Ok(ResponseHelper::error_response(
                ErrorCode::Existed,
                &format!("product {}", req.name),
                self.localizer.as_ref(),
            ));
        }

        let category = self
            .uow
            .category_query()
            .find_by_id(req.category_id)
            .await
            .map_err(|e| {
                error!("❌ Category lookup failed for ID {}: {e:?}", req.category_id);
                ServiceError::Repo(e)
            })?;
        if category.is_none() {
            info!("❌ Category not found with ID: {}", req.category_id);
            return Ok(ResponseHelper::error_response(
                ErrorCode::NotFound,
                "category",
                self.localizer.as_ref(),
            ));
        }

        if cancel.is_cancelled() {
            return Err(ServiceError::Cancelled);
        }

        let product = self
            .uow
            .product_command()
            .create_product(req)
            .await
            .map_err(|e| {
                error!("❌ Failed to create product '{}': {e:?}", req.name);
                ServiceError::Repo(e)
            })?;

        self.uow.commit().await.map_err(|e| {
            error!("❌ Commit failed after creating product '{}': {e:?}", req.name);
            ServiceError::Repo(e)
        })?;

        info!(
            "✅ Product created: '{}' (ID: {})",
            product.name, product.product_id
        );

        Ok(ResponseHelper::success_with_data(
            SuccessCode::CreateSuccess,
            "product",
            self.localizer.as_ref(),
            ProductResponse::from(product),
        ))
    }
}
