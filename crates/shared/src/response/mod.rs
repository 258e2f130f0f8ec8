mod envelope;
mod helper;

pub use self::envelope::{ErrorCode, FieldError, ResponseEnvelope, SuccessCode};
pub use self::helper::{ResponseHelper, field_errors_from};
