use std::fmt;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::scoring::ScoreFactor;

/// Incident categories offered by the claim form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentType {
    #[serde(rename = "Rear-end Collision")]
    RearEndCollision,
    #[serde(rename = "Single Vehicle Theft")]
    SingleVehicleTheft,
    #[serde(rename = "Multi-vehicle Pileup")]
    MultiVehiclePileup,
    #[serde(rename = "Fire Damage")]
    FireDamage,
    #[serde(rename = "Natural Disaster")]
    NaturalDisaster,
}

impl IncidentType {
    pub const ALL: [IncidentType; 5] = [
        IncidentType::RearEndCollision,
        IncidentType::SingleVehicleTheft,
        IncidentType::MultiVehiclePileup,
        IncidentType::FireDamage,
        IncidentType::NaturalDisaster,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::RearEndCollision => "Rear-end Collision",
            Self::SingleVehicleTheft => "Single Vehicle Theft",
            Self::MultiVehiclePileup => "Multi-vehicle Pileup",
            Self::FireDamage => "Fire Damage",
            Self::NaturalDisaster => "Natural Disaster",
        }
    }

    /// Case-insensitive lookup by form label.
    pub fn from_label(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported incident submitted for fraud evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetails {
    pub policy_number: String,
    pub claim_amount: f64,
    pub incident_type: IncidentType,
    pub location: String,
    /// Months since the policy was written.
    #[serde(rename = "policyAge")]
    pub policy_age_months: f64,
    pub previous_claims: u32,
    pub incident_date: NaiveDate,
}

impl ClaimDetails {
    /// Default form values: a low-risk urban rear-end collision on a mature policy.
    pub fn sample<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Self {
        Self {
            policy_number: format!("POL-{}", rng.gen_range(100_000..1_000_000)),
            claim_amount: 5_000.0,
            incident_type: IncidentType::RearEndCollision,
            location: "Urban".to_string(),
            policy_age_months: 24.0,
            previous_claims: 0,
            incident_date: today,
        }
    }
}

/// Coarse bucket derived from the fraud probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of a single prediction. Replaced wholesale on every submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub probability: u8,
    pub risk_level: RiskLevel,
    pub is_fraud: bool,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub factors: Vec<ScoreFactor>,
}

impl PredictionResult {
    pub fn verdict(&self) -> &'static str {
        if self.is_fraud {
            "Investigation Recommended"
        } else {
            "Verified Genuine Claim"
        }
    }
}
