//! Weather data models and the agronomic risk evaluator

use serde::{Deserialize, Serialize};

use crate::types::RiskLevel;

/// WMO weather code threshold above which precipitation is assumed
const RAIN_CODE_THRESHOLD: i32 = 51;

/// Current conditions with the derived disease/pest risk overlay.
///
/// Recomputed on every geolocation event and held alongside the
/// fertilizer advice for presentation; never merged into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub condition: String,
    pub risk_level: RiskLevel,
    pub risk_message: String,
}

/// Risk level and advisory message derived from current conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub message: String,
}

/// Derive the disease/pest risk from temperature, humidity and the
/// provider's numeric weather code.
///
/// High humidity with moderate warmth is prime fungal territory; a
/// rain-coded observation appends a water-logging caveat to whichever
/// message was selected.
pub fn evaluate_risk(temp: f64, humidity: f64, code: i32) -> RiskAssessment {
    let (level, mut message) = if humidity > 85.0 && temp > 20.0 && temp < 30.0 {
        (
            RiskLevel::High,
            "High Humidity and Warmth: Extreme risk of Fungal infections (like Blast or Rust). Monitor leaves closely.".to_string(),
        )
    } else if humidity > 70.0 || (temp > 25.0 && temp < 35.0) {
        (
            RiskLevel::Medium,
            "Increased humidity detected. Moderate risk of pest activity. Ensure proper ventilation.".to_string(),
        )
    } else {
        (
            RiskLevel::Low,
            "Weather conditions are stable. Low risk of disease outbreaks.".to_string(),
        )
    };

    if code >= RAIN_CODE_THRESHOLD {
        message.push_str(" Rainy conditions may lead to water-logging and soil-borne diseases.");
    }

    RiskAssessment { level, message }
}

/// Map a WMO weather code to a display condition.
///
/// The bucketing (0; 1-3; 51-67; 71-77; >=95; else) is a fixed external
/// contract with the weather provider.
pub fn weather_condition(code: i32) -> &'static str {
    match code {
        0 => "Clear Sky",
        1..=3 => "Partly Cloudy",
        51..=67 => "Rainy",
        71..=77 => "Snow",
        c if c >= 95 => "Thunderstorm",
        _ => "Cloudy",
    }
}

/// Build a full snapshot from raw provider fields
pub fn build_snapshot(temp: f64, humidity: f64, code: i32) -> WeatherSnapshot {
    let risk = evaluate_risk(temp, humidity, code);
    WeatherSnapshot {
        temperature_celsius: temp,
        humidity_percent: humidity,
        condition: weather_condition(code).to_string(),
        risk_level: risk.level,
        risk_message: risk.message,
    }
}
