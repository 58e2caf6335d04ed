use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use vcasky_ranking::{class_options, sort_flights, sort_options, SelectOption};
use vcasky_shared::{SearchRequest, SearchResponse};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// One of the sort option keys; anything else keeps provider order.
    pub sort: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", post(search_flights))
        .route("/v1/flights/classes", get(list_classes))
        .route("/v1/flights/sort-options", get(list_sort_options))
}

/// POST /v1/flights/search
pub async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let mut response = state.search.search(&req).await?;

    if let Some(sort) = params.sort.as_deref() {
        response.outbound_flights = sort_flights(&response.outbound_flights, sort);
        if let Some(returns) = response.return_flights.as_mut() {
            *returns = sort_flights(returns, sort);
        }
    }

    Ok(Json(response))
}

/// GET /v1/flights/classes
pub async fn list_classes() -> Json<Vec<SelectOption>> {
    Json(class_options())
}

/// GET /v1/flights/sort-options
pub async fn list_sort_options() -> Json<Vec<SelectOption>> {
    Json(sort_options())
}
