//! REST endpoint handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::WebState;
use ballflight::{
    BallflightConfig, ClassifyRequest, ClassifyResponse, ShotRecord, ShotRequest, UnitSystem,
    classify,
};

#[derive(Deserialize)]
pub struct UnitsQuery {
    pub units: Option<UnitSystem>,
}

/// POST /api/shot
///
/// Coerces the form fields, integrates the shot on the blocking pool and
/// offers it to the current-shot slot. Returns the computed record even when
/// a newer request has already claimed the slot.
pub async fn post_shot(
    State(state): State<Arc<WebState>>,
    Json(body): Json<ShotRequest>,
) -> Result<Json<ShotRecord>, StatusCode> {
    let shot_number = state.root.shots.next_shot_number();
    let inputs = body.to_inputs();
    let root = Arc::clone(&state.root);
    let record = tokio::task::spawn_blocking(move || root.hit(shot_number, inputs))
        .await
        .map_err(|e| {
            tracing::warn!("shot #{shot_number}: simulation task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    let units = state.root.system.snapshot().default_units;
    Ok(Json(record.with_units(units)))
}

/// GET /api/shot?units=imperial|metric
pub async fn get_shot(
    State(state): State<Arc<WebState>>,
    Query(query): Query<UnitsQuery>,
) -> Result<Json<ShotRecord>, StatusCode> {
    let record = state.root.shots.snapshot().ok_or(StatusCode::NOT_FOUND)?;
    let units = query
        .units
        .unwrap_or_else(|| state.root.system.snapshot().default_units);
    Ok(Json(record.with_units(units)))
}

/// POST /api/classify
pub async fn post_classify(
    State(state): State<Arc<WebState>>,
    Json(body): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let config = state.root.system.snapshot();
    let side_spin = body.side_spin.unwrap_or_else(|| {
        let speed = body.swing_speed_mph.unwrap_or(config.shot.swing_speed_mph);
        config.model.side_spin(body.face_deg, body.path_deg, speed)
    });
    Json(ClassifyResponse {
        shot_category: classify(body.face_deg, body.path_deg, side_spin),
        side_spin,
    })
}

/// GET /api/settings — returns the full persisted config.
pub async fn get_settings(State(state): State<Arc<WebState>>) -> Json<BallflightConfig> {
    Json(state.root.system.snapshot())
}

/// POST /api/settings/reload — re-read the config file. Later shots use the
/// reloaded `[model]`; the current slot is left as-is.
pub async fn post_reload_settings(State(state): State<Arc<WebState>>) -> Json<BallflightConfig> {
    state.root.system.reload();
    tracing::info!(
        "reloaded config from {}",
        state.root.system.path().display()
    );
    Json(state.root.system.snapshot())
}
