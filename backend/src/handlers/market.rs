//! HTTP handlers for the market branch

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::AppState;
use shared::MarketPrice;

/// Query parameters for price listing
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub crop: Option<String>,
}

/// List mandi prices, optionally filtered by crop
pub async fn list_market_prices(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Json<Vec<MarketPrice>> {
    Json(state.market.list_prices(query.crop.as_deref()))
}
