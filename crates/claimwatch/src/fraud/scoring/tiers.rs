use super::super::domain::RiskLevel;

pub const MEDIUM_RISK_FLOOR: u8 = 30;
pub const HIGH_RISK_FLOOR: u8 = 70;
/// Probabilities strictly above this are flagged as fraud.
pub const FRAUD_THRESHOLD: u8 = 60;

pub fn risk_level_for(probability: u8) -> RiskLevel {
    if probability < MEDIUM_RISK_FLOOR {
        RiskLevel::Low
    } else if probability < HIGH_RISK_FLOOR {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub fn is_fraud(probability: u8) -> bool {
    probability > FRAUD_THRESHOLD
}
