use crate::{
    application::record_sample::dto::MetricsResponse,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, extract::State};

/// `GET /metrics`: an independent reading plus the full rolling history.
pub async fn metrics(State(state): State<AppState>) -> Result<Json<MetricsResponse>, AppError> {
    let payload = state.record_sample().metrics().await?;
    tracing::debug!(
        cpu = payload.cpu_metric,
        mem = payload.mem_metric,
        history_len = payload.time_history.len(),
        "metrics sampled"
    );
    Ok(Json(payload))
}
