use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use vcasky_shared::Airport;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AirportQuery {
    #[serde(default)]
    pub q: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/airports", get(search_airports))
        .route("/v1/airports/popular", get(popular_airports))
        .route("/v1/airports/{code}", get(get_airport))
}

/// GET /v1/airports?q=
/// Autocomplete lookup, at most ten matches.
pub async fn search_airports(
    State(state): State<AppState>,
    Query(query): Query<AirportQuery>,
) -> Json<Vec<Airport>> {
    Json(state.directory.search(&query.q))
}

pub async fn popular_airports(State(state): State<AppState>) -> Json<Vec<Airport>> {
    Json(state.directory.popular())
}

pub async fn get_airport(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Airport>, AppError> {
    state
        .directory
        .lookup(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Airport not found: {}", code)))
}
