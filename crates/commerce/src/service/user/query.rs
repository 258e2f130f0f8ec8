use crate::{
    abstract_trait::{DynUserQueryRepository, UserQueryServiceTrait},
    domain::{requests::SearchUsers, response::UserResponse},
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
pub struct UserQueryService {
    pub query: DynUserQueryRepository,
    pub localizer: DynLocalizer,
    pub config: AppConfig,
}

impl UserQueryService {
    pub fn new(query: DynUserQueryRepository, localizer: DynLocalizer, config: AppConfig) -> Self {
        Self {
            query,
            localizer,
            config,
        }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(
        &self,
        req: &SearchUsers,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope<PaginatedList<UserResponse>>, ServiceError> {
        info!(
            "🔍 Finding all users | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 {
            req.page_size.min(self.config.max_page_size)
        } else {
            self.config.default_page_size
        };

        let source = self.query.find_all(req);
        let users = match paginate(source.as_ref(), page, page_size, cancel).await {
            Ok(list) => list,
            Err(e) => {
                error!("❌ Failed to fetch users page {page}: {e:?}");
                return Err(e);
            }
        };

        info!(
            "✅ Found {} users (total: {})",
            users.items.len(),
            users.total_items
        );

        Ok(ResponseHelper::success_with_data(
            SuccessCode::GetSuccess,
            "users",
            self.localizer.as_ref(),
            users.map(UserResponse::from),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ResponseEnvelope<UserResponse>, ServiceError> {
        info!("🆔 Finding user by ID: {id}");

        let user = self.query.find_by_id(id).await.map_err(|e| {
            error!("❌ Database error while finding user ID {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let Some(user) = user else {
            info!("❌ User not found with ID: {id}");
            return Ok(ResponseHelper::error_response(
                ErrorCode::NotFound,
                "user",
                self.localizer.as_ref(),
            ));
        };

        info!("✅ User retrieved: '{} {}' (ID: {id})", user.firstname, user.lastname);

        Ok(ResponseHelper::success_with_data(
            SuccessCode::GetSuccess,
            "user",
            self.localizer.as_ref(),
            UserResponse::from(user),
        ))
    }
}
