mod jitter;
mod rules;
mod tiers;

pub use jitter::{FixedJitter, JitterSource, RngJitter, JITTER_SPAN};
pub use tiers::{is_fraud, risk_level_for, FRAUD_THRESHOLD, HIGH_RISK_FLOOR, MEDIUM_RISK_FLOOR};

use super::domain::{ClaimDetails, PredictionResult, RiskLevel};
use serde::{Deserialize, Serialize};

/// Upper clamp on the probability. There is no lower clamp; the baseline
/// keeps every score at or above 15.
pub const MAX_PROBABILITY: u8 = 99;

/// Stateless heuristic scorer standing in for the advertised neural model.
#[derive(Debug, Default, Clone, Copy)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a claim. The jitter source is sampled exactly once.
    pub fn score<J: JitterSource + ?Sized>(
        &self,
        claim: &ClaimDetails,
        jitter: &mut J,
    ) -> RiskAssessment {
        let jitter_points = jitter::draw_points(jitter);
        let (factors, raw_score) = rules::score_claim(claim, jitter_points);
        let probability = raw_score.min(u32::from(MAX_PROBABILITY)) as u8;

        RiskAssessment {
            probability,
            risk_level: risk_level_for(probability),
            is_fraud: is_fraud(probability),
            raw_score,
            factors,
        }
    }
}

/// Which rule contributed to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    Baseline,
    HighClaimAmount,
    RepeatClaimant,
    NewPolicy,
    VehicleTheft,
    ModelVariance,
}

/// Discrete contribution to a score, kept for audit display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub kind: RiskFactorKind,
    pub points: u8,
    pub notes: String,
}

/// Scorer output before an explanation is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub probability: u8,
    pub risk_level: RiskLevel,
    pub is_fraud: bool,
    /// Sum of all factors before clamping.
    pub raw_score: u32,
    pub factors: Vec<ScoreFactor>,
}

impl RiskAssessment {
    pub fn with_explanation(self, explanation: String) -> PredictionResult {
        PredictionResult {
            probability: self.probability,
            risk_level: self.risk_level,
            is_fraud: self.is_fraud,
            explanation,
            factors: self.factors,
        }
    }
}
