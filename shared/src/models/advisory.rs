//! Fertilizer advisory models and the rule engine

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::context::UserContext;
use crate::types::Confidence;

/// Citation sources for fertilizer recommendations, in priority order
pub const SOURCES: [&str; 3] = [
    "Indian Council of Agricultural Research (ICAR)",
    "State Department of Agriculture",
    "Regional Fertilizer Guidelines",
];

/// Fixed three-step application schedule, independent of crop
pub const APPLICATION_SCHEDULE: [&str; 3] = [
    "Basal Dose: Apply 50% Urea, 100% DAP and 100% MOP at sowing.",
    "First Top Dressing: Apply 25% Urea 21 days after sowing.",
    "Second Top Dressing: Apply remaining 25% Urea at panicle initiation stage.",
];

/// Base nutrient application rates in kg per acre
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientRates {
    pub urea: f64,
    pub dap: f64,
    pub mop: f64,
}

impl NutrientRates {
    pub const fn new(urea: f64, dap: f64, mop: f64) -> Self {
        Self { urea, dap, mop }
    }
}

/// Per-crop rates keyed by soil type, with an optional crop-level default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRules {
    pub by_soil: HashMap<String, NutrientRates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<NutrientRates>,
}

/// Immutable crop x soil lookup table for base nutrient rates.
///
/// Injected into the rule engine rather than read from a global, so
/// regional tables can be swapped without touching the computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTable {
    pub crops: HashMap<String, CropRules>,
    pub default: NutrientRates,
}

impl RuleTable {
    /// The standard table distributed with the platform (ICAR-derived)
    pub fn standard() -> Self {
        let mut crops = HashMap::new();

        let mut wheat = HashMap::new();
        wheat.insert("Alluvial".to_string(), NutrientRates::new(120.0, 60.0, 40.0));
        wheat.insert("Black".to_string(), NutrientRates::new(100.0, 50.0, 30.0));
        crops.insert(
            "Wheat".to_string(),
            CropRules {
                by_soil: wheat,
                default: Some(NutrientRates::new(110.0, 55.0, 35.0)),
            },
        );

        let mut rice = HashMap::new();
        rice.insert("Alluvial".to_string(), NutrientRates::new(150.0, 80.0, 60.0));
        crops.insert(
            "Rice".to_string(),
            CropRules {
                by_soil: rice,
                default: Some(NutrientRates::new(130.0, 70.0, 50.0)),
            },
        );

        Self {
            crops,
            default: NutrientRates::new(100.0, 50.0, 40.0),
        }
    }

    /// Resolve rates via the fallback chain:
    /// exact crop+soil -> crop default -> global default.
    pub fn resolve(&self, crop: &str, soil_type: &str) -> NutrientRates {
        self.crops
            .get(crop)
            .and_then(|c| c.by_soil.get(soil_type).copied().or(c.default))
            .unwrap_or(self.default)
    }
}

/// A complete fertilizer recommendation for one request.
///
/// Built once by the rule engine with an empty explanation; the
/// explainer's output is merged in before the advice is exposed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FertilizerAdvice {
    /// Absolute urea quantity in kg for the whole field
    pub urea: u32,
    /// Absolute DAP quantity in kg for the whole field
    pub dap: u32,
    /// Absolute MOP quantity in kg for the whole field
    pub mop: u32,
    pub schedule: Vec<String>,
    pub confidence: Confidence,
    pub source: String,
    pub explanation: String,
    /// Image-based findings; absent when no photos were analysed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_findings: Option<String>,
}

/// Compute the base fertilizer recommendation for a submitted context.
///
/// Pure and total: every crop/soil combination resolves through the
/// fallback chain and a non-positive area behaves as one acre.
/// Quantities are rounded half-up to whole kilograms.
pub fn compute_base_advice(table: &RuleTable, context: &UserContext) -> FertilizerAdvice {
    let rates = table.resolve(&context.crop, &context.soil_type);
    let area = context.effective_area();

    FertilizerAdvice {
        urea: (rates.urea * area).round() as u32,
        dap: (rates.dap * area).round() as u32,
        mop: (rates.mop * area).round() as u32,
        schedule: APPLICATION_SCHEDULE.iter().map(|s| s.to_string()).collect(),
        confidence: Confidence::High,
        source: SOURCES[0].to_string(),
        explanation: String::new(),
        disease_findings: None,
    }
}
