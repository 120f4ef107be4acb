//! Mandi market price lookup serving the market branch

use rust_decimal::Decimal;

use shared::{MarketPrice, PriceTrend};

/// Market price service.
///
/// Prices are a static in-memory quote sheet for now; a live mandi feed
/// would slot in behind the same interface.
#[derive(Clone)]
pub struct MarketService {
    prices: Vec<MarketPrice>,
}

impl Default for MarketService {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketService {
    pub fn new() -> Self {
        Self {
            prices: standard_prices(),
        }
    }

    /// List quoted prices, optionally filtered by crop name substring
    pub fn list_prices(&self, crop: Option<&str>) -> Vec<MarketPrice> {
        match crop {
            Some(filter) => {
                let needle = filter.to_lowercase();
                self.prices
                    .iter()
                    .filter(|p| p.crop.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            None => self.prices.clone(),
        }
    }
}

fn standard_prices() -> Vec<MarketPrice> {
    vec![
        MarketPrice {
            crop: "Wheat".to_string(),
            price: Decimal::from(2275),
            unit: "quintal".to_string(),
            trend: PriceTrend::Up,
            mandi: "Khanna Mandi".to_string(),
        },
        MarketPrice {
            crop: "Rice (Basmati)".to_string(),
            price: Decimal::from(4500),
            unit: "quintal".to_string(),
            trend: PriceTrend::Down,
            mandi: "Nellore Mandi".to_string(),
        },
        MarketPrice {
            crop: "Maize".to_string(),
            price: Decimal::from(2100),
            unit: "quintal".to_string(),
            trend: PriceTrend::Stable,
            mandi: "Kurnool Mandi".to_string(),
        },
        MarketPrice {
            crop: "Sugarcane".to_string(),
            price: Decimal::from(340),
            unit: "quintal".to_string(),
            trend: PriceTrend::Up,
            mandi: "Chittoor Mandi".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_prices_without_filter() {
        let service = MarketService::new();
        assert_eq!(service.list_prices(None).len(), 4);
    }

    #[test]
    fn filters_by_crop_substring_case_insensitively() {
        let service = MarketService::new();
        let rice = service.list_prices(Some("rice"));
        assert_eq!(rice.len(), 1);
        assert_eq!(rice[0].crop, "Rice (Basmati)");

        assert!(service.list_prices(Some("jute")).is_empty());
    }
}
