use axum::http::HeaderMap;

use crate::error::GatewayError;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

// Static key check; an unset or mismatched header is rejected
pub fn require_api_key(state: &AppState, headers: &HeaderMap) -> Result<(), GatewayError> {
    let presented = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if !state.api_key.is_empty() && key == state.api_key => Ok(()),
        _ => Err(GatewayError::Forbidden),
    }
}
