//! Farmer context submitted to the advisory pipeline

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Maximum number of field photos accepted per request
pub const MAX_IMAGES: usize = 5;

/// An encoded field photo attached to a context submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageAttachment {
    /// Declared image MIME type, e.g. "image/jpeg"
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data_base64: String,
}

/// Everything the pipeline knows about the farmer's situation.
///
/// Built by the context-gathering collaborator and treated as immutable
/// once submitted to the pipeline for a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserContext {
    pub region: String,
    pub crop: String,
    /// Field area in acres
    pub area: f64,
    pub soil_type: String,
    pub season: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sowing_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub language: Language,
    /// Field photos, oldest first (0..=MAX_IMAGES)
    #[serde(default)]
    pub images: Vec<ImageAttachment>,
}

impl UserContext {
    /// Area coerced to a positive multiplier. The rule table has no
    /// zero-area semantics, so non-positive, NaN, or infinite values
    /// behave as a single acre.
    pub fn effective_area(&self) -> f64 {
        if self.area.is_finite() && self.area > 0.0 {
            self.area
        } else {
            1.0
        }
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}
