use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    pub order_id: i32,

    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "shipped")]
    pub status: String,

    #[validate(required(message = "Order date is required"))]
    pub order_date: Option<NaiveDateTime>,
}
