//! Advisory orchestrator and in-memory session store
//!
//! Sequences one advisory request per session:
//! `Idle -> Classifying -> {BranchMarket | GatheringContext} -> Computing
//! -> Explaining -> Ready`. Classification and explanation are the only
//! suspension points and both soft-fail internally, so the orchestrator
//! never branches on step errors, only on which payload it received.

use std::collections::HashMap;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::classifier::ClassifierService;
use crate::services::explainer::ExplainerService;
use shared::{
    compute_base_advice, validate_context, validate_query, FertilizerAdvice, ProblemCategory,
    RuleTable, UserContext, WeatherSnapshot,
};

/// Pipeline stage of one advisory session
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryStage {
    Idle,
    Classifying,
    BranchMarket,
    GatheringContext,
    Computing,
    Explaining,
    Ready,
}

/// Where the caller should go after classification
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Market,
    ContextGathering,
}

/// Routing decision returned for a submitted query
#[derive(Debug, Clone, Serialize)]
pub struct QueryRouting {
    pub category: ProblemCategory,
    pub route: Route,
}

/// One user session and everything it has accumulated
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorySession {
    pub id: Uuid,
    pub stage: AdvisoryStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProblemCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<UserContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<FertilizerAdvice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdvisorySession {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            stage: AdvisoryStage::Idle,
            category: None,
            context: None,
            advice: None,
            weather: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Return to `Idle`, dropping the advisory artifacts and submitted
    /// images. All other context fields persist across resets.
    pub fn reset(&mut self) {
        self.stage = AdvisoryStage::Idle;
        self.category = None;
        self.advice = None;
        if let Some(context) = &mut self.context {
            context.images.clear();
        }
        self.updated_at = Utc::now();
    }
}

/// Shared in-memory session store
type SessionStore = Arc<RwLock<HashMap<Uuid, AdvisorySession>>>;

/// Advisory orchestrator service
#[derive(Clone)]
pub struct AdvisoryService {
    rules: Arc<RuleTable>,
    classifier: ClassifierService,
    explainer: ExplainerService,
    sessions: SessionStore,
}

impl AdvisoryService {
    pub fn new(
        rules: Arc<RuleTable>,
        classifier: ClassifierService,
        explainer: ExplainerService,
    ) -> Self {
        Self {
            rules,
            classifier,
            explainer,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new idle session
    pub async fn start_session(&self) -> AdvisorySession {
        let session = AdvisorySession::new();
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    /// Get the current view of a session
    pub async fn get_session(&self, session_id: Uuid) -> AppResult<AdvisorySession> {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Session".to_string()))
    }

    /// Classify a submitted query and decide the route.
    ///
    /// Empty queries are rejected before classification. The single
    /// classification attempt soft-fails to `General` internally, so
    /// this only errors on bad input or an unknown session.
    pub async fn submit_query(&self, session_id: Uuid, query: &str) -> AppResult<QueryRouting> {
        validate_query(query).map_err(|e| AppError::Validation {
            field: "query".to_string(),
            message: e.to_string(),
            message_hi: "प्रश्न खाली नहीं हो सकता".to_string(),
        })?;

        self.update_session(session_id, |s| s.stage = AdvisoryStage::Classifying)
            .await?;

        let category = self.classifier.classify(query).await;
        let route = route_for(category);

        self.update_session(session_id, |s| {
            s.category = Some(category);
            s.stage = match route {
                Route::Market => AdvisoryStage::BranchMarket,
                Route::ContextGathering => AdvisoryStage::GatheringContext,
            };
        })
        .await?;

        tracing::debug!("Query classified as {}", category.as_str());
        Ok(QueryRouting { category, route })
    }

    /// Run the computation and explanation steps for a submitted
    /// context, returning the merged advice.
    pub async fn submit_context(
        &self,
        session_id: Uuid,
        context: UserContext,
    ) -> AppResult<FertilizerAdvice> {
        validate_context(&context).map_err(|e| AppError::ValidationError(e.to_string()))?;

        // Undecodable photos would travel all the way to the LLM request
        // before failing; reject them at the boundary instead
        for image in &context.images {
            B64.decode(&image.data_base64).map_err(|_| {
                AppError::ValidationError("Image payload is not valid base64".to_string())
            })?;
        }

        self.update_session(session_id, |s| s.stage = AdvisoryStage::Computing)
            .await?;

        let mut advice = compute_base_advice(&self.rules, &context);

        self.update_session(session_id, |s| s.stage = AdvisoryStage::Explaining)
            .await?;

        let explanation = self.explainer.explain(&context, &advice).await;
        advice.explanation = explanation.explanation;
        advice.disease_findings = explanation.disease_findings;

        let merged = advice.clone();
        self.update_session(session_id, move |s| {
            s.context = Some(context);
            s.advice = Some(advice);
            s.stage = AdvisoryStage::Ready;
        })
        .await?;

        Ok(merged)
    }

    /// Attach the latest weather snapshot (or clear it when the fetch
    /// produced nothing). Held alongside the advice, never merged in.
    pub async fn record_weather(
        &self,
        session_id: Uuid,
        snapshot: Option<WeatherSnapshot>,
    ) -> AppResult<Option<WeatherSnapshot>> {
        let recorded = snapshot.clone();
        self.update_session(session_id, move |s| s.weather = snapshot)
            .await?;
        Ok(recorded)
    }

    /// Reset a session to `Idle`, clearing submitted images only
    pub async fn reset(&self, session_id: Uuid) -> AppResult<AdvisorySession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::NotFound("Session".to_string()))?;
        session.reset();
        Ok(session.clone())
    }

    async fn update_session(
        &self,
        session_id: Uuid,
        apply: impl FnOnce(&mut AdvisorySession),
    ) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::NotFound("Session".to_string()))?;
        apply(session);
        session.updated_at = Utc::now();
        Ok(())
    }
}

/// Pure routing switch on the classified category. Only `Market` leaves
/// the advisory pipeline; every other category gathers context next.
pub fn route_for(category: ProblemCategory) -> Route {
    match category {
        ProblemCategory::Market => Route::Market,
        _ => Route::ContextGathering,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ImageAttachment, Language};

    fn submitted_session() -> AdvisorySession {
        let mut session = AdvisorySession::new();
        session.stage = AdvisoryStage::Ready;
        session.category = Some(ProblemCategory::Fertilizer);
        session.context = Some(UserContext {
            region: "Punjab".to_string(),
            crop: "Wheat".to_string(),
            area: 2.5,
            soil_type: "Alluvial".to_string(),
            season: "Rabi".to_string(),
            sowing_date: None,
            language: Language::Hindi,
            images: vec![ImageAttachment {
                mime_type: "image/jpeg".to_string(),
                data_base64: "aGVsbG8=".to_string(),
            }],
        });
        session
    }

    #[test]
    fn reset_returns_to_idle_and_drops_artifacts() {
        let mut session = submitted_session();
        session.advice = Some(FertilizerAdvice {
            urea: 300,
            dap: 150,
            mop: 100,
            schedule: vec![],
            confidence: shared::Confidence::High,
            source: String::new(),
            explanation: "• done".to_string(),
            disease_findings: None,
        });

        session.reset();

        assert_eq!(session.stage, AdvisoryStage::Idle);
        assert_eq!(session.category, None);
        assert!(session.advice.is_none());
    }

    #[test]
    fn reset_clears_images_but_keeps_other_context_fields() {
        let mut session = submitted_session();
        session.reset();

        let context = session.context.expect("context should persist");
        assert!(context.images.is_empty());
        assert_eq!(context.region, "Punjab");
        assert_eq!(context.crop, "Wheat");
        assert_eq!(context.area, 2.5);
        assert_eq!(context.soil_type, "Alluvial");
        assert_eq!(context.season, "Rabi");
        assert_eq!(context.language, Language::Hindi);
    }

    #[test]
    fn only_market_branches_away_from_context_gathering() {
        assert_eq!(route_for(ProblemCategory::Market), Route::Market);
        assert_eq!(
            route_for(ProblemCategory::Fertilizer),
            Route::ContextGathering
        );
        assert_eq!(route_for(ProblemCategory::Disease), Route::ContextGathering);
        assert_eq!(route_for(ProblemCategory::General), Route::ContextGathering);
        assert_eq!(route_for(ProblemCategory::None), Route::ContextGathering);
    }
}
