//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Supported languages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Telugu => "te",
        }
    }
}

/// Problem categories a farmer query can be routed to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProblemCategory {
    Fertilizer,
    Disease,
    Market,
    General,
    None,
}

impl ProblemCategory {
    /// Parse a classifier label. Labels outside the closed set are
    /// rejected so the caller falls back to `General` explicitly.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "fertilizer" => Some(ProblemCategory::Fertilizer),
            "disease" => Some(ProblemCategory::Disease),
            "market" => Some(ProblemCategory::Market),
            "general" => Some(ProblemCategory::General),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemCategory::Fertilizer => "fertilizer",
            ProblemCategory::Disease => "disease",
            ProblemCategory::Market => "market",
            ProblemCategory::General => "general",
            ProblemCategory::None => "none",
        }
    }
}

/// Risk level for weather-driven disease/pest warnings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Confidence attached to a fertilizer recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Price movement direction at a mandi
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}
