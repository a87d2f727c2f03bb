//! Claim form intake: every field is required, numbers arrive as text.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{ClaimDetails, IncidentType};

/// Raw form values as typed by the investigator.
///
/// JSON clients may send numeric fields as numbers; they are treated as their
/// textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimForm {
    #[serde(default, deserialize_with = "form_text")]
    pub policy_number: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub claim_amount: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub incident_type: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub policy_age: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub previous_claims: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub incident_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimValidationError {
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("{field} must be a number (got '{value}')")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be a whole number (got '{value}')")]
    NotWholeNumber { field: &'static str, value: String },
    #[error("{field} cannot be negative (got '{value}')")]
    Negative { field: &'static str, value: String },
    #[error("incidentDate must be YYYY-MM-DD (got '{value}')")]
    InvalidDate { value: String },
    #[error("unknown incident type '{value}'")]
    UnknownIncidentType { value: String },
}

impl ClaimForm {
    /// Prefill the form from an existing claim, e.g. the default sample.
    pub fn from_claim(claim: &ClaimDetails) -> Self {
        Self {
            policy_number: Some(claim.policy_number.clone()),
            claim_amount: Some(claim.claim_amount.to_string()),
            incident_type: Some(claim.incident_type.label().to_string()),
            location: Some(claim.location.clone()),
            policy_age: Some(claim.policy_age_months.to_string()),
            previous_claims: Some(claim.previous_claims.to_string()),
            incident_date: Some(claim.incident_date.format("%Y-%m-%d").to_string()),
        }
    }

    /// Check required fields, then parse. Blank fields are all reported at once.
    pub fn validate(&self) -> Result<ClaimDetails, ClaimValidationError> {
        let fields = [
            ("policyNumber", &self.policy_number),
            ("claimAmount", &self.claim_amount),
            ("incidentType", &self.incident_type),
            ("location", &self.location),
            ("policyAge", &self.policy_age),
            ("previousClaims", &self.previous_claims),
            ("incidentDate", &self.incident_date),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| filled(value).is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ClaimValidationError::MissingFields(missing));
        }

        let policy_number = required(&self.policy_number).to_string();
        let claim_amount = parse_amount("claimAmount", required(&self.claim_amount))?;

        let incident_raw = required(&self.incident_type);
        let incident_type = IncidentType::from_label(incident_raw).ok_or_else(|| {
            ClaimValidationError::UnknownIncidentType {
                value: incident_raw.to_string(),
            }
        })?;

        let location = required(&self.location).to_string();
        let policy_age_months = parse_amount("policyAge", required(&self.policy_age))?;
        let previous_claims = parse_count("previousClaims", required(&self.previous_claims))?;

        let date_raw = required(&self.incident_date);
        let incident_date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").map_err(|_| {
            ClaimValidationError::InvalidDate {
                value: date_raw.to_string(),
            }
        })?;

        Ok(ClaimDetails {
            policy_number,
            claim_amount,
            incident_type,
            location,
            policy_age_months,
            previous_claims,
            incident_date,
        })
    }
}

fn filled(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

// Only called after the missing-field check has passed.
fn required(value: &Option<String>) -> &str {
    filled(value).unwrap_or_default()
}

fn parse_amount(field: &'static str, raw: &str) -> Result<f64, ClaimValidationError> {
    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ClaimValidationError::InvalidNumber {
            field,
            value: raw.to_string(),
        })?;

    if value < 0.0 {
        return Err(ClaimValidationError::Negative {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, ClaimValidationError> {
    let value = parse_amount(field, raw)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ClaimValidationError::NotWholeNumber {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value as u32)
}

fn form_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FormTextVisitor)
}

/// Accepts a string, a number or null; anything else is a type error.
struct FormTextVisitor;

impl<'de> Visitor<'de> for FormTextVisitor {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}
