use super::super::domain::ClaimDetails;

pub const INVESTIGATOR_PERSONA: &str = "You are an expert insurance fraud investigator with deep knowledge of suspicious claim patterns.";

/// Returned whenever the remote service cannot produce usable text.
pub const FALLBACK_EXPLANATION: &str = "This claim shows patterns consistent with historical fraud cases involving similar claim amounts and incident profiles.";

pub fn explanation_prompt(claim: &ClaimDetails, probability: u8) -> String {
    format!(
        "Analyze the following insurance claim details and explain why it was flagged with a {probability}% fraud probability.

Details:
- Claim Amount: ${amount}
- Incident Type: {incident}
- Location: {location}
- Policy Age: {age} months
- Previous Claims: {previous}

Provide a professional, concise explanation (2-3 sentences) detailing the suspicious patterns or risk factors.",
        amount = claim.claim_amount,
        incident = claim.incident_type,
        location = claim.location,
        age = claim.policy_age_months,
        previous = claim.previous_claims,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraud::domain::IncidentType;
    use chrono::NaiveDate;

    #[test]
    fn prompt_embeds_claim_fields_and_probability() {
        let claim = ClaimDetails {
            policy_number: "POL-123456".to_string(),
            claim_amount: 18_250.5,
            incident_type: IncidentType::FireDamage,
            location: "Rural".to_string(),
            policy_age_months: 4.0,
            previous_claims: 3,
            incident_date: NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"),
        };

        let prompt = explanation_prompt(&claim, 87);

        assert!(prompt.contains("87% fraud probability"));
        assert!(prompt.contains("- Claim Amount: $18250.5"));
        assert!(prompt.contains("- Incident Type: Fire Damage"));
        assert!(prompt.contains("- Location: Rural"));
        assert!(prompt.contains("- Policy Age: 4 months"));
        assert!(prompt.contains("- Previous Claims: 3"));
        assert!(prompt.contains("(2-3 sentences)"));
        assert!(!prompt.contains("POL-123456"));
    }
}
