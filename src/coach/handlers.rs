use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{instrument, warn};
use uuid::Uuid;

use super::dto::{CoachRequest, CoachResponse};
use super::services::coach_user;
use crate::{body::body_user_id, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/agent/coach", post(coach))
}

/// POST /agent/coach { user_id }
#[instrument(skip(state, payload))]
pub async fn coach(
    State(state): State<AppState>,
    payload: Result<Json<CoachRequest>, JsonRejection>,
) -> Result<Json<CoachResponse>, ApiError> {
    let Json(req) = payload?;
    let Some(raw) = body_user_id(req.user_id, req.user_id_alt) else {
        warn!("coach called without user_id");
        return Err(ApiError::bad_request("user_id required in body"));
    };
    let user_id = Uuid::parse_str(&raw)
        .map_err(|_| ApiError::bad_request("user_id must be a UUID"))?;

    let today = OffsetDateTime::now_utc().date();
    let res = coach_user(state.store.as_ref(), &state.config.coach, user_id, today).await?;
    Ok(Json(res))
}
