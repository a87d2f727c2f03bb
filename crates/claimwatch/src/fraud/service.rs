use std::sync::Arc;
use std::time::Duration;

use super::domain::{ClaimDetails, PredictionResult};
use super::explanation::ExplanationProvider;
use super::form::{ClaimForm, ClaimValidationError};
use super::scoring::{JitterSource, RiskAssessment, RiskScorer};

/// Service composing the scorer and the explanation provider.
pub struct FraudAnalysisService<E> {
    scorer: RiskScorer,
    explainer: Arc<E>,
    processing_delay: Duration,
}

impl<E> FraudAnalysisService<E>
where
    E: ExplanationProvider + 'static,
{
    pub fn new(explainer: Arc<E>) -> Self {
        Self {
            scorer: RiskScorer::new(),
            explainer,
            processing_delay: Duration::ZERO,
        }
    }

    /// Hold every prediction for at least `delay`, overlapping the explanation call.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Synchronous scoring step; no explanation attached.
    pub fn assess<J: JitterSource + ?Sized>(
        &self,
        claim: &ClaimDetails,
        jitter: &mut J,
    ) -> RiskAssessment {
        self.scorer.score(claim, jitter)
    }

    /// Attach the explanation to an assessment.
    pub async fn explain(&self, claim: &ClaimDetails, assessment: RiskAssessment) -> PredictionResult {
        let explanation = self.explainer.explain(claim, assessment.probability);
        let explanation = if self.processing_delay.is_zero() {
            explanation.await
        } else {
            let (explanation, ()) =
                tokio::join!(explanation, tokio::time::sleep(self.processing_delay));
            explanation
        };
        assessment.with_explanation(explanation)
    }

    /// Score a claim and explain the result.
    pub async fn analyze<J: JitterSource + ?Sized>(
        &self,
        claim: &ClaimDetails,
        jitter: &mut J,
    ) -> PredictionResult {
        let assessment = self.assess(claim, jitter);
        self.explain(claim, assessment).await
    }

    /// Validate a submitted form, then analyze it. Invalid forms are never scored.
    pub async fn predict<J: JitterSource + ?Sized>(
        &self,
        form: &ClaimForm,
        jitter: &mut J,
    ) -> Result<PredictionResult, ClaimValidationError> {
        let claim = form.validate()?;
        Ok(self.analyze(&claim, jitter).await)
    }
}
