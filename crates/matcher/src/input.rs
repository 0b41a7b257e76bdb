//! Validation of inbound match requests.
//!
//! A request is a JSON object carrying `rgb: [r, g, b]`. Anything else is an
//! [`MatchError::InvalidInput`]; this is the only place that error originates
//! for well-formed JSON.

use serde_json::Value;

use crate::types::{MatchError, Rgb};

/// Extract the query color from a request body.
pub fn parse_request(body: &Value) -> Result<Rgb, MatchError> {
    let rgb = body
        .get("rgb")
        .filter(|v| !v.is_null())
        .ok_or_else(|| MatchError::InvalidInput("missing `rgb` field".into()))?;
    parse_rgb(rgb)
}

/// Parse a bare `[r, g, b]` JSON array, rounding and clamping each channel.
pub fn parse_rgb(value: &Value) -> Result<Rgb, MatchError> {
    let items = value
        .as_array()
        .ok_or_else(|| MatchError::InvalidInput("`rgb` must be an array".into()))?;

    let [r, g, b] = items.as_slice() else {
        return Err(MatchError::InvalidInput(format!(
            "`rgb` must have exactly 3 components, got {}",
            items.len()
        )));
    };

    Rgb::from_components(component(r, 0)?, component(g, 1)?, component(b, 2)?)
}

fn component(value: &Value, index: usize) -> Result<f64, MatchError> {
    value.as_f64().ok_or_else(|| {
        MatchError::InvalidInput(format!("`rgb[{index}]` must be a number, got {value}"))
    })
}
