use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::GatewayError;
use crate::handlers::require_api_key;
use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{GenerateRequest, GenerateResponse};
use crate::state::AppState;

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, GatewayError> {
    REQUEST_TOTAL.inc();
    require_api_key(&state, &headers)?;

    // an empty prompt is still a prompt; only a missing one is rejected
    let prompt = payload
        .prompt
        .ok_or(GatewayError::InvalidArgument("Prompt is required"))?;

    let start_time = Instant::now();

    // check cache first, a broken store only costs us the cache
    match state.cache.lookup(&prompt).await {
        Ok(Some(response)) => {
            REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
            return Ok(Json(GenerateResponse {
                cached: true,
                response,
            }));
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "cache lookup failed, calling completion uncached"),
    }

    let response = state
        .completion
        .complete(&prompt)
        .await
        .map_err(GatewayError::Completion)?;

    if let Err(e) = state.cache.store(&prompt, &response).await {
        warn!(error = %e, "failed to cache completion");
    }

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
    info!(latency_ms = start_time.elapsed().as_millis() as u64, "completion served");

    Ok(Json(GenerateResponse {
        cached: false,
        response,
    }))
}
