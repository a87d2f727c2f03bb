//! Claim fraud scoring: form intake, the heuristic scorer, the explanation
//! boundary, and the HTTP routes that tie them together.

pub mod domain;
pub mod explanation;
pub mod form;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod showcase;

#[cfg(test)]
mod tests;

pub use domain::{ClaimDetails, IncidentType, PredictionResult, RiskLevel};
pub use explanation::{
    ExplanationProvider, FallbackExplainer, GeminiClient, GenerationError, GenerationRequest,
    InvestigatorExplainer, SamplingParameters, TextGenerator, FALLBACK_EXPLANATION,
};
pub use form::{ClaimForm, ClaimValidationError};
pub use router::fraud_router;
pub use scoring::{
    FixedJitter, JitterSource, RiskAssessment, RiskFactorKind, RiskScorer, RngJitter, ScoreFactor,
};
pub use service::FraudAnalysisService;
pub use session::{AnalysisSession, SubmissionTicket};
pub use showcase::{DashboardSnapshot, DashboardStats, ModelCard};
