use serde::de::DeserializeOwned;
use serde_json::Value;

use super::fence::strip_code_fence;
use crate::structured::{join_errors, ShapeValidator};
use crate::types::RawResponse;
use crate::{Error, Result};

/// Decode a structured reply.
///
/// Trims the text, strips an optional fence, parses JSON, runs `validator`
/// and finally deserializes into `T`. Any failure along the way is
/// [`Error::MalformedPayload`] carrying the extracted text; the caller decides
/// whether to fall back to plain-text rendering.
pub fn normalize_structured<T: DeserializeOwned>(
    raw: &RawResponse,
    validator: Option<&dyn ShapeValidator>,
) -> Result<T> {
    let body = strip_code_fence(raw.text());

    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::malformed(format!("response was not valid JSON ({})", e), body))?;

    if let Some(validator) = validator {
        validator.validate(&value).map_err(|errors| {
            Error::malformed(
                format!("response failed shape validation ({})", join_errors(&errors)),
                body,
            )
        })?;
    }

    serde_json::from_value(value).map_err(|e| {
        Error::malformed(
            format!("response did not match the expected type ({})", e),
            body,
        )
    })
}
