//! Treatment HTTP Routes
//!
//! - `GET /items` - selectable items by category
//! - `POST /find_treatment` - decide a treatment for a selection
//! - `POST /explain` - explain how the decision was reached
//!
//! Every request reads the table afresh; a table that fails to load
//! answers 500 with its `ABX_TABLE_*` code.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::api::{ApiHandler, ItemListing, TreatmentOutcome, TreatmentRequest};
use crate::engine::ExplainDecision;

use super::errors::HttpResult;
use super::state::AppState;

/// Create treatment routes
pub fn treatment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/items", get(items_handler))
        .route("/find_treatment", post(find_treatment_handler))
        .route("/explain", post(explain_handler))
        .with_state(state)
}

async fn items_handler(State(state): State<Arc<AppState>>) -> HttpResult<Json<ItemListing>> {
    let table = state.snapshot()?;
    Ok(Json(ApiHandler::new(&table, state.rules()).items()))
}

/// A request that found no treatment still answers 200 with
/// `success: false`.
async fn find_treatment_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TreatmentRequest>, JsonRejection>,
) -> HttpResult<Json<TreatmentOutcome>> {
    let Json(request) = payload?;
    let table = state.snapshot()?;
    let outcome = ApiHandler::new(&table, state.rules()).decide(&request)?;
    Ok(Json(outcome))
}

async fn explain_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TreatmentRequest>, JsonRejection>,
) -> HttpResult<Json<ExplainDecision>> {
    let Json(request) = payload?;
    let table = state.snapshot()?;
    Ok(Json(ApiHandler::new(&table, state.rules()).explain(&request)))
}
