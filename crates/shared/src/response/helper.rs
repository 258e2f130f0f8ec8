use crate::localization::Localizer;
use crate::response::envelope::{ErrorCode, FieldError, ResponseEnvelope, SuccessCode};
use validator::ValidationErrors;

const DEFAULT_ERROR_TEMPLATE: &str = "The operation on {subject} failed";
const DEFAULT_SUCCESS_TEMPLATE: &str = "The operation on {subject} completed successfully";

/// Builds the standardized envelopes. Construction is total: a localization
/// miss substitutes the fixed default template instead of failing the
/// response.
pub struct ResponseHelper;

impl ResponseHelper {
    pub fn error_response<T>(
        code: ErrorCode,
        subject: &str,
        localizer: &dyn Localizer,
    ) -> ResponseEnvelope<T> {
        ResponseEnvelope {
            success: false,
            code: code.as_str().to_string(),
            message: render(localizer, code.message_key(), DEFAULT_ERROR_TEMPLATE, subject),
            data: None,
            errors: Vec::new(),
        }
    }

    /// Failure envelope carrying the validator's `(field, message)` pairs
    /// verbatim.
    pub fn validation_error_response<T>(
        code: ErrorCode,
        errors: Vec<FieldError>,
        localizer: &dyn Localizer,
        subject: &str,
    ) -> ResponseEnvelope<T> {
        ResponseEnvelope {
            success: false,
            code: code.as_str().to_string(),
            message: render(localizer, code.message_key(), DEFAULT_ERROR_TEMPLATE, subject),
            data: None,
            errors,
        }
    }

    pub fn success_response<T>(
        code: SuccessCode,
        subject: &str,
        localizer: &dyn Localizer,
    ) -> ResponseEnvelope<T> {
        ResponseEnvelope {
            success: true,
            code: code.as_str().to_string(),
            message: render(
                localizer,
                code.message_key(),
                DEFAULT_SUCCESS_TEMPLATE,
                subject,
            ),
            data: None,
            errors: Vec::new(),
        }
    }

    pub fn success_with_data<T>(
        code: SuccessCode,
        subject: &str,
        localizer: &dyn Localizer,
        data: T,
    ) -> ResponseEnvelope<T> {
        ResponseEnvelope {
            data: Some(data),
            ..Self::success_response(code, subject, localizer)
        }
    }
}

fn render(localizer: &dyn Localizer, key: &str, fallback: &str, subject: &str) -> String {
    localizer
        .localize(key)
        .unwrap_or_else(|| fallback.to_string())
        .replace("{subject}", subject)
}

/// Flattens `validator::ValidationErrors` into per-field entries, sorted by
/// field name for stable output.
pub fn field_errors_from(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));

            out.push(FieldError {
                field: field.to_string(),
                message,
            });
        }
    }

    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::StaticLocalizer;

    struct EmptyLocalizer;

    impl Localizer for EmptyLocalizer {
        fn localize(&self, _key: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn not_found_error_has_no_payload_and_a_message() {
        let localizer = StaticLocalizer::default();

        let envelope: ResponseEnvelope<()> =
            ResponseHelper::error_response(ErrorCode::NotFound, "thing", &localizer);

        assert!(!envelope.success);
        assert_eq!(envelope.code, "not_found");
        assert!(!envelope.message.is_empty());
        assert!(envelope.data.is_none());
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn success_envelope_has_empty_error_list() {
        let localizer = StaticLocalizer::default();

        let envelope: ResponseEnvelope<()> =
            ResponseHelper::success_response(SuccessCode::CreateSuccess, "thing", &localizer);

        assert!(envelope.success);
        assert_eq!(envelope.code, "create_success");
        assert_eq!(envelope.message, "thing created successfully");
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn validation_errors_are_carried_verbatim() {
        let localizer = StaticLocalizer::default();
        let errors = vec![FieldError {
            field: "name".to_string(),
            message: "Name is required".to_string(),
        }];

        let envelope: ResponseEnvelope<()> = ResponseHelper::validation_error_response(
            ErrorCode::CreateError,
            errors,
            &localizer,
            "product",
        );

        assert!(!envelope.success);
        assert_eq!(envelope.errors.len(), 1);
        assert_eq!(envelope.errors[0].field, "name");
        assert_eq!(envelope.errors[0].message, "Name is required");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn localization_miss_falls_back_to_default_template() {
        let envelope: ResponseEnvelope<()> =
            ResponseHelper::error_response(ErrorCode::Unknown, "order", &EmptyLocalizer);

        assert_eq!(envelope.message, "The operation on order failed");
    }

    #[test]
    fn success_with_data_keeps_the_payload() {
        let localizer = StaticLocalizer::default();

        let envelope =
            ResponseHelper::success_with_data(SuccessCode::GetSuccess, "number", &localizer, 7);

        assert!(envelope.success);
        assert_eq!(envelope.data, Some(7));
    }

    #[test]
    fn wire_shape_omits_empty_fields() {
        let localizer = StaticLocalizer::default();

        let envelope: ResponseEnvelope<()> =
            ResponseHelper::error_response(ErrorCode::NotFound, "user", &localizer);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], serde_json::json!(false));
        assert_eq!(json["code"], serde_json::json!("not_found"));
        assert!(json.get("data").is_none());
        assert!(json.get("errors").is_none());
    }
}
