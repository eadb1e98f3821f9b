use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;
use tracing::{error, info};

use crate::classifier::{classify, detected_items};
use crate::error::GatewayError;
use crate::handlers::require_api_key;
use crate::metrics::{REQUEST_TOTAL, SUGGESTIONS_TOTAL};
use crate::models::{SuggestionRequest, SuggestionResponse};
use crate::state::AppState;

pub async fn suggestions_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, GatewayError> {
    REQUEST_TOTAL.inc();
    require_api_key(&state, &headers)?;

    let image_url = payload
        .image_url
        .filter(|u| !u.is_empty())
        .ok_or(GatewayError::InvalidArgument("Image URL is required"))?;

    let labels = state.vision.detect(&image_url).await.map_err(|e| {
        error!(error = %e, "vision request failed");
        GatewayError::Suggestions(e)
    })?;

    let items = detected_items(&labels);
    let suggestions = classify(&items);
    SUGGESTIONS_TOTAL.inc();
    info!(items = items.len(), category = %suggestions.category, "suggestion generated");

    Ok(Json(SuggestionResponse {
        success: true,
        detected_items: items,
        suggestions,
    }))
}
