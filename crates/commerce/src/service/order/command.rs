use crate::{
    abstract_trait::{DynUnitOfWork, OrderCommandServiceTrait},
    domain::{requests::UpdateOrderRequest, response::OrderResponse},
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
pub struct OrderCommandService {
    pub uow: DynUnitOfWork,
    pub localizer: DynLocalizer,
}

impl OrderCommandService {
    pub fn new(uow: DynUnitOfWork, localizer: DynLocalizer) -> Self {
        Self { uow, localizer }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn update_order(
        &self,
        req: &UpdateOrderRequest,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope<OrderResponse>, ServiceError> {
        info!("📋 Updating order ID: {}", req.order_id);

        if let Err(validation) = req.validate() {
            info!("❌ Order payload rejected by validation");
            return Ok(ResponseHelper::validation_error_response(
                ErrorCode::UpdateError,
                field_errors_from(&validation),
                self.localizer.as_ref(),
                "order",
            ));
        }

        if cancel.is_cancelled() {
            return Err(ServiceError::Cancelled);
        }

        let existing = self
            .uow
            .order_query()
            .find_by_id(req.order_id)
            .await
            .map_err(|e| {
                error!("❌ Order lookup failed for ID {}: {e:?}", req.order_id);
                ServiceError::Repo(e)
            })?;
        if existing.is_none() {
            info!("❌ Order not found with ID: {}", req.order_id);
            return Ok(ResponseHelper::error_response(
                ErrorCode::NotFound,
                "order",
                self.localizer.as_ref(),
            ));
        }

        if cancel.is_cancelled() {
            return Err(ServiceError::Cancelled);
        }

        let order = self
            .uow
            .order_command()
            .update_order(req)
            .await
            .map_err(|e| {
                error!("❌ Failed to update order ID {}: {e:?}", req.order_id);
                ServiceError::Repo(e)
            })?;

        self.uow.commit().await.map_err(|e| {
            error!("❌ Commit failed after updating order ID {}: {e:?}", req.order_id);
            ServiceError::Repo(e)
        })?;

        info!("✅ Order updated: ID {} -> '{}'", order.order_id, order.status);

        Ok(ResponseHelper::success_with_data(
            SuccessCode::UpdateSuccess,
            "order",
            self.localizer.as_ref(),
            OrderResponse::from(order),
        ))
    }
}
