//! Query classification service
//!
//! Resolves a farmer's free-text problem statement into one of the
//! closed problem categories with a single LLM round-trip. This is the
//! only place ambiguous text becomes a deterministic branch; everything
//! downstream is a pure switch on the returned category.

use serde::Deserialize;

use crate::external::llm::{LlmClient, Part};
use shared::ProblemCategory;

/// Classifier service
#[derive(Clone)]
pub struct ClassifierService {
    llm: LlmClient,
}

/// Structured classification output requested from the model
#[derive(Debug, Deserialize)]
struct ClassificationResponse {
    category: String,
}

impl ClassifierService {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Classify a query into a problem category.
    ///
    /// Soft-failing: any transport error, malformed response, or label
    /// outside the closed set yields `General` rather than an error.
    pub async fn classify(&self, query: &str) -> ProblemCategory {
        let prompt = format!(
            "Classify the following farmer query into one of these categories: \
             'fertilizer', 'disease', 'market', 'general'. \
             Respond with a JSON object {{\"category\": \"<label>\"}}. Query: \"{}\"",
            query
        );

        match self.llm.generate_json(vec![Part::text(prompt)]).await {
            Ok(body) => match parse_category(&body) {
                Some(category) => category,
                None => {
                    tracing::warn!("Unrecognized classification label, falling back to general");
                    ProblemCategory::General
                }
            },
            Err(e) => {
                tracing::warn!("Classification failed, falling back to general: {}", e);
                ProblemCategory::General
            }
        }
    }
}

/// Parse the model's JSON body into a category
fn parse_category(body: &str) -> Option<ProblemCategory> {
    let parsed: ClassificationResponse = serde_json::from_str(body).ok()?;
    ProblemCategory::from_label(&parsed.category)
}
