//! Mandi market price models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::PriceTrend;

/// A quoted price for a crop at a specific mandi
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPrice {
    pub crop: String,
    /// Price per unit in INR
    pub price: Decimal,
    pub unit: String,
    pub trend: PriceTrend,
    pub mandi: String,
}
