use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tripdesk_core::{ResponseStatus, SearchRequest, SearchResponse};
use tripdesk_shared::Country;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_ADD_COUNT: usize = 10;
const MAX_ADD_COUNT: usize = 10_000;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/openings/count", get(count_openings))
        .route("/openings/countries", get(country_counts))
        .route("/openings/add", get(add_openings))
        .route("/openings/search", get(search_openings))
}

async fn count_openings(State(state): State<AppState>) -> Result<Json<usize>, AppError> {
    Ok(Json(state.openings.count().await?))
}

#[derive(Debug, Serialize)]
pub struct CountryCountsResponse {
    pub status: ResponseStatus,
    pub country_counts: BTreeMap<Country, usize>,
    pub total_openings: usize,
}

async fn country_counts(State(state): State<AppState>) -> Result<Json<CountryCountsResponse>, AppError> {
    let openings = state.openings.snapshot().await?;

    let mut country_counts = BTreeMap::new();
    for opening in &openings {
        *country_counts.entry(opening.country).or_insert(0) += 1;
    }

    Ok(Json(CountryCountsResponse {
        status: ResponseStatus::Found,
        country_counts,
        total_openings: openings.len(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct AddParams {
    pub n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub msg: String,
    /// Inventory size after the insert.
    pub updated_rows_ct: usize,
    pub record_ids: Vec<Uuid>,
}

async fn add_openings(
    State(state): State<AppState>,
    Query(params): Query<AddParams>,
) -> Result<Json<AddResponse>, AppError> {
    let n = params.n.unwrap_or(DEFAULT_ADD_COUNT);
    if n > MAX_ADD_COUNT {
        return Err(AppError::ValidationError(format!(
            "n must be at most {}",
            MAX_ADD_COUNT
        )));
    }

    // Generator lock is released before touching the store.
    let openings = state.generator.lock().generate(n);
    let record_ids: Vec<Uuid> = openings.iter().map(|o| o.opening_id).collect();
    state.openings.insert_many(openings).await?;
    let total = state.openings.count().await?;

    tracing::info!("Added {} openings, {} listed", n, total);
    Ok(Json(AddResponse {
        msg: format!("{} rows added", group_thousands(n)),
        updated_rows_ct: total,
        record_ids,
    }))
}

/// `1234567` → `"1,234,567"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

async fn search_openings(
    State(state): State<AppState>,
    Query(request): Query<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let inventory = state.openings.snapshot().await?;
    Ok(Json(state.search.search(&request, inventory)))
}
