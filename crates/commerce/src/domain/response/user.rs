use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User view model. Deleted users still render, with `is_deleted` set, so
/// administrative listings can show them.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub role: Option<String>,
    pub is_deleted: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            firstname: value.firstname,
            lastname: value.lastname,
            email: value.email,
            role: value.role,
            is_deleted: value.is_deleted,
        }
    }
}
