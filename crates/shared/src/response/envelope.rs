use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One field-level validation failure, carried verbatim from the validator.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    CreateError,
    UpdateError,
    DeleteError,
    NotFound,
    Existed,
    ValidationFailed,
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::CreateError => "create_error",
            ErrorCode::UpdateError => "update_error",
            ErrorCode::DeleteError => "delete_error",
            ErrorCode::NotFound => "not_found",
            ErrorCode::Existed => "existed",
            ErrorCode::ValidationFailed => "validation_failed",
            ErrorCode::Unknown => "unknown",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            ErrorCode::CreateError => "error.create",
            ErrorCode::UpdateError => "error.update",
            ErrorCode::DeleteError => "error.delete",
            ErrorCode::NotFound => "error.not_found",
            ErrorCode::Existed => "error.existed",
            ErrorCode::ValidationFailed => "error.validation",
            ErrorCode::Unknown => "error.unknown",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SuccessCode {
    CreateSuccess,
    UpdateSuccess,
    DeleteSuccess,
    GetSuccess,
}

impl SuccessCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuccessCode::CreateSuccess => "create_success",
            SuccessCode::UpdateSuccess => "update_success",
            SuccessCode::DeleteSuccess => "delete_success",
            SuccessCode::GetSuccess => "get_success",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            SuccessCode::CreateSuccess => "success.create",
            SuccessCode::UpdateSuccess => "success.update",
            SuccessCode::DeleteSuccess => "success.delete",
            SuccessCode::GetSuccess => "success.get",
        }
    }
}

/// Uniform success/error wrapper returned by every handler. Wire shape:
/// `{success, code, message, data?, errors?}`; error envelopes never carry
/// a payload.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ResponseEnvelope<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl<T: Serialize> fmt::Display for ResponseEnvelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(e) => write!(f, "Error serializing ResponseEnvelope to JSON: {e}"),
        }
    }
}
