//! Stat block API routes
//!
//! Endpoints for validating, auto-fixing, scaling and auditing creatures.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::application::dto::{AuditRequest, FixRequest, ScaleRequest};
use crate::domain::entities::CreatureRecord;
use crate::domain::value_objects::FixMode;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::state::AppState;

/// Requested mode, or the configured default
fn resolve_mode(state: &AppState, requested: Option<&str>) -> Result<FixMode, ApiError> {
    match requested {
        Some(mode) => Ok(mode.parse()?),
        None => Ok(state.config.default_fix_mode),
    }
}

/// Run every validator over a creature
pub async fn validate_stat_block(
    State(state): State<Arc<AppState>>,
    Json(creature): Json<CreatureRecord>,
) -> impl IntoResponse {
    Json(state.stat_block_service.validate(&creature))
}

/// Auto-fix a creature
pub async fn fix_stat_block(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FixRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mode = resolve_mode(&state, req.mode.as_deref())?;
    Ok(Json(state.stat_block_service.fix(&req.creature, mode)))
}

/// Rescale a creature to a new experience award
pub async fn scale_stat_block(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScaleRequest>,
) -> impl IntoResponse {
    Json(state.stat_block_service.scale(&req.creature, req.target_xp))
}

/// Optional rescale, auto-fix and validation in one call
pub async fn audit_stat_block(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AuditRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mode = resolve_mode(&state, req.mode.as_deref())?;
    Ok(Json(state.stat_block_service.audit(
        &req.creature,
        mode,
        req.target_rating.as_ref(),
    )))
}
