//! HTTP handlers for weather snapshots

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::AppState;
use shared::{GpsCoordinates, WeatherSnapshot};

/// Fetch current conditions for the caller's geolocation and attach the
/// derived risk snapshot to the session. A failed fetch records `null`;
/// no snapshot is ever fabricated.
pub async fn refresh_session_weather(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(location): Json<GpsCoordinates>,
) -> AppResult<Json<Option<WeatherSnapshot>>> {
    let snapshot = state.weather.current_snapshot(location).await;
    let recorded = state.advisory.record_weather(session_id, snapshot).await?;
    Ok(Json(recorded))
}
