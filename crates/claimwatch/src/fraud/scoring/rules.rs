use super::super::domain::{ClaimDetails, IncidentType};
use super::{RiskFactorKind, ScoreFactor};

pub(crate) const BASELINE_POINTS: u8 = 15;

pub(crate) const HIGH_CLAIM_AMOUNT: f64 = 15_000.0;
pub(crate) const HIGH_CLAIM_POINTS: u8 = 30;

pub(crate) const REPEAT_CLAIMANT_THRESHOLD: u32 = 2;
pub(crate) const REPEAT_CLAIMANT_POINTS: u8 = 25;

pub(crate) const NEW_POLICY_MONTHS: f64 = 6.0;
pub(crate) const NEW_POLICY_POINTS: u8 = 20;

pub(crate) const VEHICLE_THEFT_POINTS: u8 = 10;

/// Apply the additive heuristic. Returns the triggered factors and the raw,
/// unclamped total.
pub(crate) fn score_claim(claim: &ClaimDetails, jitter_points: u8) -> (Vec<ScoreFactor>, u32) {
    let mut factors = vec![ScoreFactor {
        kind: RiskFactorKind::Baseline,
        points: BASELINE_POINTS,
        notes: "baseline risk applied to every claim".to_string(),
    }];

    if claim.claim_amount > HIGH_CLAIM_AMOUNT {
        factors.push(ScoreFactor {
            kind: RiskFactorKind::HighClaimAmount,
            points: HIGH_CLAIM_POINTS,
            notes: format!(
                "claim amount ${} exceeds ${}",
                claim.claim_amount, HIGH_CLAIM_AMOUNT
            ),
        });
    }

    if claim.previous_claims > REPEAT_CLAIMANT_THRESHOLD {
        factors.push(ScoreFactor {
            kind: RiskFactorKind::RepeatClaimant,
            points: REPEAT_CLAIMANT_POINTS,
            notes: format!(
                "{} previous claims (more than {REPEAT_CLAIMANT_THRESHOLD})",
                claim.previous_claims
            ),
        });
    }

    if claim.policy_age_months < NEW_POLICY_MONTHS {
        factors.push(ScoreFactor {
            kind: RiskFactorKind::NewPolicy,
            points: NEW_POLICY_POINTS,
            notes: format!(
                "policy written {} month(s) ago (under {NEW_POLICY_MONTHS})",
                claim.policy_age_months
            ),
        });
    }

    if claim.incident_type == IncidentType::SingleVehicleTheft {
        factors.push(ScoreFactor {
            kind: RiskFactorKind::VehicleTheft,
            points: VEHICLE_THEFT_POINTS,
            notes: "single vehicle theft".to_string(),
        });
    }

    if jitter_points > 0 {
        factors.push(ScoreFactor {
            kind: RiskFactorKind::ModelVariance,
            points: jitter_points,
            notes: "model variance".to_string(),
        });
    }

    let total = factors.iter().map(|factor| u32::from(factor.points)).sum();
    (factors, total)
}
