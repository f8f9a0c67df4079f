mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;
mod services;

use crate::state::AppState;
use axum::Router;

pub use repo_types::{NewTransaction, Transaction, TxKind, DEFAULT_CATEGORY};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
