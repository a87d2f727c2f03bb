use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::fraud::domain::{ClaimDetails, IncidentType};
use crate::fraud::explanation::{
    ExplanationProvider, GenerationError, GenerationRequest, TextGenerator,
};

pub(super) fn incident_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid incident date")
}

/// Claim that triggers none of the additive rules.
pub(super) fn quiet_claim() -> ClaimDetails {
    ClaimDetails {
        policy_number: "POL-482913".to_string(),
        claim_amount: 5_000.0,
        incident_type: IncidentType::RearEndCollision,
        location: "Urban".to_string(),
        policy_age_months: 24.0,
        previous_claims: 0,
        incident_date: incident_date(),
    }
}

/// Claim that triggers every additive rule.
pub(super) fn loud_claim() -> ClaimDetails {
    ClaimDetails {
        policy_number: "POL-771204".to_string(),
        claim_amount: 20_000.0,
        incident_type: IncidentType::SingleVehicleTheft,
        location: "Suburban".to_string(),
        policy_age_months: 3.0,
        previous_claims: 3,
        incident_date: incident_date(),
    }
}

/// Generator that replays scripted outcomes and records each request.
#[derive(Default)]
pub(super) struct ScriptedGenerator {
    outcomes: Mutex<VecDeque<Result<String, GenerationError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
    delay: Option<Duration>,
}

impl ScriptedGenerator {
    pub(super) fn replying(text: &str) -> Self {
        Self::with_outcome(Ok(text.to_string()))
    }

    pub(super) fn failing(error: GenerationError) -> Self {
        Self::with_outcome(Err(error))
    }

    pub(super) fn with_outcome(outcome: Result<String, GenerationError>) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::from([outcome])),
            ..Self::default()
        }
    }

    pub(super) fn stalled(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::replying("too late")
        }
    }

    pub(super) fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("requests mutex").clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests
            .lock()
            .expect("requests mutex")
            .push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcomes
            .lock()
            .expect("outcomes mutex")
            .pop_front()
            .unwrap_or(Err(GenerationError::Empty))
    }
}

/// Deterministic provider echoing its inputs.
#[derive(Debug, Default)]
pub(super) struct EchoExplainer {
    pub(super) calls: Mutex<Vec<(String, u8)>>,
}

#[async_trait]
impl ExplanationProvider for EchoExplainer {
    async fn explain(&self, claim: &ClaimDetails, probability: u8) -> String {
        self.calls
            .lock()
            .expect("calls mutex")
            .push((claim.policy_number.clone(), probability));
        format!("{} scored {probability}", claim.policy_number)
    }
}
