use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{AddTransactionRequest, AddTransactionResponse, TransactionSummary};
use super::repo_types::Transaction;
use super::services::{summarize, validate_new_transaction};
use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions/add", post(add_transaction))
        .route("/transactions/:user_id", get(list_transactions))
        .route("/transactions/:user_id/summary", get(get_summary))
}

/// POST /transactions/add
#[instrument(skip(state, payload))]
pub async fn add_transaction(
    State(state): State<AppState>,
    payload: Result<Json<AddTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddTransactionResponse>), ApiError> {
    let Json(req) = payload?;
    let today = OffsetDateTime::now_utc().date();

    let new_tx = match validate_new_transaction(req, today) {
        Ok(tx) => tx,
        Err(e) => {
            warn!(error = %e, "transaction rejected");
            return Err(e);
        }
    };

    let stored = state.store.insert_transaction(&new_tx).await?;
    info!(
        user_id = %stored.user_id,
        id = %stored.id,
        kind = ?stored.kind,
        "transaction added"
    );

    Ok((
        StatusCode::CREATED,
        Json(AddTransactionResponse {
            message: "Transaction added",
            data: stored,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    user_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let Path(user_id) = user_id?;
    let txs = state.store.list_transactions(user_id, None).await?;
    Ok(Json(txs))
}

#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    user_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TransactionSummary>, ApiError> {
    let Path(user_id) = user_id?;
    let txs = state.store.list_transactions(user_id, None).await?;
    Ok(Json(summarize(&txs)))
}
