use super::common::*;
use crate::fraud::domain::IncidentType;
use crate::fraud::form::{ClaimForm, ClaimValidationError};

fn filled_form() -> ClaimForm {
    ClaimForm::from_claim(&quiet_claim())
}

#[test]
fn prefilled_form_round_trips_to_the_same_claim() {
    let claim = filled_form().validate().expect("prefilled form is valid");
    assert_eq!(claim, quiet_claim());
}

#[test]
fn blank_fields_are_reported_together() {
    let mut form = filled_form();
    form.location = Some("   ".to_string());
    form.policy_age = None;
    form.incident_date = Some(String::new());

    match form.validate() {
        Err(ClaimValidationError::MissingFields(fields)) => {
            assert_eq!(fields, vec!["location", "policyAge", "incidentDate"]);
        }
        other => panic!("expected missing fields, got {other:?}"),
    }
}

#[test]
fn empty_form_lists_every_field() {
    match ClaimForm::default().validate() {
        Err(ClaimValidationError::MissingFields(fields)) => assert_eq!(fields.len(), 7),
        other => panic!("expected missing fields, got {other:?}"),
    }
}

#[test]
fn numeric_fields_are_parsed_from_text() {
    let mut form = filled_form();
    form.claim_amount = Some(" 18250.75 ".to_string());
    form.policy_age = Some("4".to_string());
    form.previous_claims = Some("3.0".to_string());
    form.incident_type = Some("single vehicle theft".to_string());

    let claim = form.validate().expect("valid form");
    assert_eq!(claim.claim_amount, 18_250.75);
    assert_eq!(claim.policy_age_months, 4.0);
    assert_eq!(claim.previous_claims, 3);
    assert_eq!(claim.incident_type, IncidentType::SingleVehicleTheft);
}

#[test]
fn rejects_non_numeric_amount() {
    let mut form = filled_form();
    form.claim_amount = Some("five thousand".to_string());
    assert!(matches!(
        form.validate(),
        Err(ClaimValidationError::InvalidNumber {
            field: "claimAmount",
            ..
        })
    ));

    form.claim_amount = Some("NaN".to_string());
    assert!(matches!(
        form.validate(),
        Err(ClaimValidationError::InvalidNumber { .. })
    ));
}

#[test]
fn rejects_negative_values() {
    let mut form = filled_form();
    form.claim_amount = Some("-250".to_string());
    assert!(matches!(
        form.validate(),
        Err(ClaimValidationError::Negative {
            field: "claimAmount",
            ..
        })
    ));

    let mut form = filled_form();
    form.previous_claims = Some("-1".to_string());
    assert!(matches!(
        form.validate(),
        Err(ClaimValidationError::Negative {
            field: "previousClaims",
            ..
        })
    ));
}

#[test]
fn rejects_fractional_claim_counts() {
    let mut form = filled_form();
    form.previous_claims = Some("2.5".to_string());
    assert!(matches!(
        form.validate(),
        Err(ClaimValidationError::NotWholeNumber {
            field: "previousClaims",
            ..
        })
    ));
}

#[test]
fn policy_age_accepts_partial_months() {
    let mut form = filled_form();
    form.policy_age = Some("5.5".to_string());
    let claim = form.validate().expect("fractional policy age is valid");
    assert_eq!(claim.policy_age_months, 5.5);

    form.policy_age = Some("-0.5".to_string());
    assert!(matches!(
        form.validate(),
        Err(ClaimValidationError::Negative {
            field: "policyAge",
            ..
        })
    ));
}

#[test]
fn rejects_unknown_incident_type_and_bad_dates() {
    let mut form = filled_form();
    form.incident_type = Some("Alien Abduction".to_string());
    assert_eq!(
        form.validate(),
        Err(ClaimValidationError::UnknownIncidentType {
            value: "Alien Abduction".to_string()
        })
    );

    let mut form = filled_form();
    form.incident_date = Some("06/02/2025".to_string());
    assert_eq!(
        form.validate(),
        Err(ClaimValidationError::InvalidDate {
            value: "06/02/2025".to_string()
        })
    );
}

#[test]
fn json_numbers_are_accepted_as_text() {
    let form: ClaimForm = serde_json::from_value(serde_json::json!({
        "policyNumber": "POL-100200",
        "claimAmount": 20000,
        "incidentType": "Fire Damage",
        "location": "Rural",
        "policyAge": 12,
        "previousClaims": "1",
        "incidentDate": "2025-06-02"
    }))
    .expect("form deserializes");

    assert_eq!(form.claim_amount.as_deref(), Some("20000"));
    let claim = form.validate().expect("valid form");
    assert_eq!(claim.claim_amount, 20_000.0);
    assert_eq!(claim.policy_age_months, 12.0);
    assert_eq!(claim.incident_type, IncidentType::FireDamage);
}

#[test]
fn non_scalar_json_values_are_type_errors() {
    let err = serde_json::from_value::<ClaimForm>(serde_json::json!({
        "policyNumber": "POL-100200",
        "claimAmount": true
    }))
    .expect_err("boolean amount is rejected");

    assert!(err.to_string().contains("expected a string or number"));
}

#[test]
fn json_null_counts_as_blank() {
    let form: ClaimForm = serde_json::from_value(serde_json::json!({
        "policyNumber": null,
        "claimAmount": 5.5
    }))
    .expect("form deserializes");

    assert_eq!(form.policy_number, None);
    assert_eq!(form.claim_amount.as_deref(), Some("5.5"));
}
