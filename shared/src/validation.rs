//! Validation utilities for the Krishi Advisory Platform

use crate::models::{UserContext, MAX_IMAGES};

/// Validate a raw problem query before classification.
///
/// An empty query must never reach the classifier.
pub fn validate_query(query: &str) -> Result<(), &'static str> {
    if query.trim().is_empty() {
        return Err("Query must not be empty");
    }
    Ok(())
}

/// Validate a context submission before it enters the pipeline
pub fn validate_context(context: &UserContext) -> Result<(), &'static str> {
    if context.crop.trim().is_empty() {
        return Err("Crop must be selected");
    }
    if context.soil_type.trim().is_empty() {
        return Err("Soil type must be selected");
    }
    validate_image_count(context.images.len())
}

/// Validate the number of attached field photos
pub fn validate_image_count(count: usize) -> Result<(), &'static str> {
    if count > MAX_IMAGES {
        return Err("At most 5 field photos are accepted per request");
    }
    Ok(())
}
