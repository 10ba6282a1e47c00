//! Write-path request validation
//!
//! The write pipeline moves through explicit stages: body present, payload
//! typed, value cleaned and checked against the denylist. Each rejection is
//! a named [`ApiError`] variant rather than an ad hoc presence check, and
//! everything here runs before any database connection is acquired.

use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use stega_codec::AnnotationCodec;
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};

/// Reserved value rejected by the write path.
pub const REJECTED_VALUE_SENTINEL: &str = "non";

/// Write request payload for `POST /api/{project_id}/{key}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetValueRequest {
    /// The value to store. May carry an annotation, which is stripped
    /// before persistence.
    #[schema(example = "Chapter 1")]
    pub value: String,
}

/// Parse the optional request body into the typed write payload.
pub fn parse_set_value(body: Option<Json<Value>>) -> ApiResult<SetValueRequest> {
    let Json(payload) = body.ok_or(ApiError::MissingBody)?;
    serde_json::from_value(payload).map_err(|_| ApiError::MissingValue)
}

/// Strip any embedded annotation and enforce the value denylist.
///
/// The sentinel comparison runs on the *cleaned* text, so an annotated
/// rendition of the sentinel is rejected the same as the bare literal.
pub fn sanitize_value(codec: &dyn AnnotationCodec, raw: &str) -> ApiResult<String> {
    let outcome = codec.split(raw);
    if outcome.cleaned == REJECTED_VALUE_SENTINEL {
        return Err(ApiError::RejectedValue);
    }
    Ok(outcome.cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use stega_codec::{AnnotationMetadata, SplitOutcome, ZeroWidthCodec};

    mock! {
        Codec {}

        impl AnnotationCodec for Codec {
            fn combine(&self, value: &str, metadata: &AnnotationMetadata) -> String;
            fn split(&self, input: &str) -> SplitOutcome;
        }
    }

    #[test]
    fn missing_body_is_rejected() {
        let result = parse_set_value(None);
        assert!(matches!(result, Err(ApiError::MissingBody)));
    }

    #[test]
    fn body_without_value_property_is_rejected() {
        let result = parse_set_value(Some(Json(serde_json::json!({"other": "x"}))));
        assert!(matches!(result, Err(ApiError::MissingValue)));
    }

    #[test]
    fn body_with_value_property_parses() {
        let payload = parse_set_value(Some(Json(serde_json::json!({"value": "Chapter 1"}))))
            .expect("payload should parse");
        assert_eq!(payload.value, "Chapter 1");
    }

    #[test]
    fn clean_value_passes_through_stripped() {
        let codec = ZeroWidthCodec::new();
        let annotated = codec.combine("Chapter 1", &AnnotationMetadata::new("33", "title"));

        let cleaned = sanitize_value(&codec, &annotated).expect("value should be accepted");
        assert_eq!(cleaned, "Chapter 1");
    }

    #[test]
    fn sentinel_value_is_rejected() {
        let codec = ZeroWidthCodec::new();
        let result = sanitize_value(&codec, "non");
        assert!(matches!(result, Err(ApiError::RejectedValue)));
    }

    #[test]
    fn annotated_sentinel_is_rejected_after_stripping() {
        let codec = ZeroWidthCodec::new();
        let annotated = codec.combine("non", &AnnotationMetadata::new("33", "title"));

        let result = sanitize_value(&codec, &annotated);
        assert!(matches!(result, Err(ApiError::RejectedValue)));
    }

    #[test]
    fn sentinel_check_uses_the_codec_cleaned_text() {
        // A substituted codec decides what "cleaned" means; the denylist
        // follows its verdict, not the raw input.
        let mut codec = MockCodec::new();
        codec.expect_split().returning(|_| SplitOutcome {
            cleaned: REJECTED_VALUE_SENTINEL.to_string(),
            metadata: None,
        });

        let result = sanitize_value(&codec, "looks harmless");
        assert!(matches!(result, Err(ApiError::RejectedValue)));
    }
}
