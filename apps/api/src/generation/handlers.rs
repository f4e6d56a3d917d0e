//! Axum route handlers for the brand kit API.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::brief::BrandBrief;
use crate::state::AppState;

/// POST /api/v1/brand-kits/generate
///
/// Runs the generation pipeline for one brief and returns the decoded kit.
/// A body that fails to parse is classified like any other unexpected
/// failure rather than surfacing an extractor-shaped rejection.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<BrandBrief>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(brief) = payload.map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;

    let kit = state.service.generate(&brief).await?;

    Ok(Json(kit))
}
