//! Advisory explanation service
//!
//! Turns an already-computed fertilizer recommendation into farmer-facing
//! prose, and, when field photos were attached, a separate image-findings
//! section. The model is instructed to explain the computed quantities
//! only, never to propose new ones.

use crate::external::llm::{LlmClient, Part};
use shared::{FertilizerAdvice, UserContext};

/// Header the model is instructed to emit between the fertilizer
/// explanation and the image analysis. Prompt and parser must stay in
/// lockstep on this string; matching is ASCII-case-insensitive to absorb
/// minor model drift.
pub const ANALYSIS_SEPARATOR: &str = "--- Disease & Nutrient Analysis ---";

/// Fallback explanation when the model call fails
const FALLBACK_EXPLANATION: &str = "• This recommendation is based on standard nutrient \
                                    requirements for your selected crop and region.";

/// Fallback findings when the model call fails with photos attached
const FALLBACK_FINDINGS: &str = "• Image analysis encountered an error.";

/// Placeholder findings when photos were attached but the model did not
/// emit a separate analysis section
const INLINE_FINDINGS_PLACEHOLDER: &str = "Analysis details are included in the explanation above.";

/// Explanation produced for one advisory request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub explanation: String,
    pub disease_findings: Option<String>,
}

/// Explainer service
#[derive(Clone)]
pub struct ExplainerService {
    llm: LlmClient,
}

impl ExplainerService {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Generate the explanation (and image findings) for a computed
    /// recommendation.
    ///
    /// Soft-failing: a transport or model error yields deterministic
    /// fallback text, with fallback findings iff photos were attached.
    /// The raw error never reaches the caller.
    pub async fn explain(&self, context: &UserContext, advice: &FertilizerAdvice) -> Explanation {
        let mut parts = vec![Part::text(build_prompt(context, advice))];
        for image in &context.images {
            parts.push(Part::inline_image(
                image.mime_type.clone(),
                image.data_base64.clone(),
            ));
        }

        match self.llm.generate_text(parts).await {
            Ok(text) => split_sections(&text, context.has_images()),
            Err(e) => {
                tracing::warn!("Explanation failed, using fallback text: {}", e);
                Explanation {
                    explanation: FALLBACK_EXPLANATION.to_string(),
                    disease_findings: context
                        .has_images()
                        .then(|| FALLBACK_FINDINGS.to_string()),
                }
            }
        }
    }
}

/// Build the explanation prompt for a context and computed advice
fn build_prompt(context: &UserContext, advice: &FertilizerAdvice) -> String {
    format!(
        "You are an expert agricultural officer. Explain the following fertilizer \
         recommendation to a farmer.\n\
         Context: Crop: {}, Area: {} acres, Soil: {}.\n\
         Recommendation: Urea: {}kg, DAP: {}kg, MOP: {}kg.\n\n\
         If images are provided, also analyze them for potential diseases or nutrient \
         deficiencies.\n\n\
         CRITICAL INSTRUCTIONS:\n\
         1. Structure your entire response using clear bullet points (starting with '•' or '-').\n\
         2. Keep points concise and actionable.\n\
         3. DO NOT suggest new chemicals or quantities for fertilizers. ONLY explain the \
         reasoning for the calculated numbers.\n\
         4. Separate the Fertilizer Explanation from the Image Analysis Findings with the \
         header \"{}\".\n\
         5. If analyzing images, be specific about visual symptoms observed in the provided \
         photos.",
        context.crop,
        context.effective_area(),
        context.soil_type,
        advice.urea,
        advice.dap,
        advice.mop,
        ANALYSIS_SEPARATOR,
    )
}

/// Split a model response at the analysis separator.
///
/// With the separator present the response becomes two trimmed sections.
/// Without it, the whole text is the explanation; findings get a fixed
/// placeholder only when photos were attached, so "photos but no
/// separator" stays distinguishable from "no photos".
pub fn split_sections(full_text: &str, has_images: bool) -> Explanation {
    // The separator is ASCII, so byte offsets into the lowered copy are
    // valid offsets into the original text
    let lowered = full_text.to_ascii_lowercase();
    let sentinel = ANALYSIS_SEPARATOR.to_ascii_lowercase();

    if let Some(idx) = lowered.find(&sentinel) {
        let explanation = full_text[..idx].trim().to_string();
        let findings = full_text[idx + ANALYSIS_SEPARATOR.len()..].trim().to_string();
        return Explanation {
            explanation,
            disease_findings: Some(findings),
        };
    }

    Explanation {
        explanation: full_text.trim().to_string(),
        disease_findings: has_images.then(|| INLINE_FINDINGS_PLACEHOLDER.to_string()),
    }
}
