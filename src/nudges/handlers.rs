use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{AddNudgeRequest, AddNudgeResponse};
use super::repo_types::{NewNudge, Nudge};
use crate::{body::body_user_id, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/nudges/add", post(add_nudge))
        .route("/nudges/:user_id", get(list_nudges))
}

#[instrument(skip(state))]
pub async fn list_nudges(
    State(state): State<AppState>,
    user_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Nudge>>, ApiError> {
    let Path(user_id) = user_id?;
    let nudges = state.store.list_nudges(user_id).await.map_err(|e| {
        warn!(error = %e, %user_id, "list nudges failed");
        ApiError::StoreRejected(e)
    })?;
    Ok(Json(nudges))
}

/// POST /nudges/add
#[instrument(skip(state, payload))]
pub async fn add_nudge(
    State(state): State<AppState>,
    payload: Result<Json<AddNudgeRequest>, JsonRejection>,
) -> Result<Json<AddNudgeResponse>, ApiError> {
    let Json(req) = payload?;

    let (Some(user_id), Some(message)) = (
        body_user_id(req.user_id, req.user_id_alt),
        req.message.filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(ApiError::bad_request("user_id and message are required"));
    };
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::bad_request("user_id must be a UUID"))?;

    let new_nudge = NewNudge {
        user_id,
        message,
        language: req
            .language
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| state.config.coach.nudge_language.clone()),
        category: req.category,
        insights: req.insights,
        actions: req.actions,
    };

    let saved = state.store.insert_nudge(&new_nudge).await.map_err(|e| {
        warn!(error = %e, %user_id, "insert nudge failed");
        ApiError::StoreRejected(e)
    })?;
    info!(%user_id, id = %saved.id, "nudge added");

    Ok(Json(AddNudgeResponse {
        message: "Nudge added",
        data: saved,
    }))
}
