//! Response schema validation.
//!
//! The service speaks loosely-typed JSON. Bodies are checked field by field
//! so a payload of the wrong shape becomes `ApiError::MalformedResponse`
//! instead of a half-filled result.

use crate::error::{ApiError, ApiResult};
use crate::types::{CalculationResponse, CalculationResult, CalculationStatus, SaturationProperties};
use serde_json::{Map, Value};

/// Parse and validate a raw response body.
pub fn parse_response(body: &str) -> ApiResult<CalculationResponse> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::malformed(format!("body is not valid JSON: {e}")))?;
    validate_response(&value)
}

/// Validate an already-decoded response body.
pub fn validate_response(value: &Value) -> ApiResult<CalculationResponse> {
    let object = value
        .as_object()
        .ok_or_else(|| ApiError::malformed("body must be a JSON object"))?;

    match object.get("status").and_then(Value::as_str) {
        Some("success") => validate_success(object).map(CalculationResponse::Success),
        Some("error") => Ok(CalculationResponse::Failure {
            message: optional_string(object, "message")?,
        }),
        Some(other) => Err(ApiError::malformed(format!("unknown status `{other}`"))),
        None => Err(ApiError::malformed("`status` must be a string")),
    }
}

fn validate_success(object: &Map<String, Value>) -> ApiResult<CalculationResult> {
    let state = required_string(object, "state")?;
    let details = required_string(object, "details")?;

    let saturation_properties = match object.get("saturationProperties") {
        None | Some(Value::Null) => None,
        Some(Value::Object(entries)) => {
            let mut props = SaturationProperties::new();
            for (name, raw) in entries {
                let value = raw
                    .as_f64()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        ApiError::malformed(format!("saturation property `{name}` must be a number"))
                    })?;
                props.push(name.clone(), value);
            }
            Some(props)
        }
        Some(_) => {
            return Err(ApiError::malformed(
                "`saturationProperties` must be an object",
            ));
        }
    };

    Ok(CalculationResult {
        status: CalculationStatus::Success,
        state,
        details,
        saturation_properties,
    })
}

fn required_string(object: &Map<String, Value>, key: &str) -> ApiResult<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::malformed(format!("`{key}` must be a string")))
}

fn optional_string(object: &Map<String, Value>, key: &str) -> ApiResult<Option<String>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ApiError::malformed(format!("`{key}` must be a string"))),
    }
}
