use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::fraud::domain::RiskLevel;
use crate::fraud::explanation::{FallbackExplainer, InvestigatorExplainer, FALLBACK_EXPLANATION};
use crate::fraud::form::{ClaimForm, ClaimValidationError};
use crate::fraud::scoring::FixedJitter;
use crate::fraud::service::FraudAnalysisService;

#[tokio::test]
async fn analyze_attaches_explanation_for_computed_probability() {
    let explainer = Arc::new(EchoExplainer::default());
    let service = FraudAnalysisService::new(explainer.clone());

    let result = service.analyze(&loud_claim(), &mut FixedJitter::ZERO).await;

    assert_eq!(result.probability, 99);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert!(result.is_fraud);
    assert_eq!(result.explanation, "POL-771204 scored 99");
    assert_eq!(
        explainer.calls.lock().expect("calls mutex").as_slice(),
        &[("POL-771204".to_string(), 99)]
    );
}

#[tokio::test]
async fn identical_inputs_give_identical_results() {
    let service = FraudAnalysisService::new(Arc::new(EchoExplainer::default()));
    let claim = quiet_claim();

    let first = service.analyze(&claim, &mut FixedJitter(0.4)).await;
    let second = service.analyze(&claim, &mut FixedJitter(0.4)).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn remote_failure_never_surfaces_to_caller() {
    let generator = ScriptedGenerator::failing(crate::fraud::explanation::GenerationError::Empty);
    let explainer = InvestigatorExplainer::new(generator, Duration::from_secs(1));
    let service = FraudAnalysisService::new(Arc::new(explainer));

    let result = service.analyze(&quiet_claim(), &mut FixedJitter::ZERO).await;

    assert_eq!(result.probability, 15);
    assert_eq!(result.explanation, FALLBACK_EXPLANATION);
}

#[tokio::test]
async fn predict_rejects_incomplete_forms_without_scoring() {
    let explainer = Arc::new(EchoExplainer::default());
    let service = FraudAnalysisService::new(explainer.clone());

    let mut form = ClaimForm::from_claim(&quiet_claim());
    form.policy_number = None;

    let outcome = service.predict(&form, &mut FixedJitter::ZERO).await;
    assert!(matches!(
        outcome,
        Err(ClaimValidationError::MissingFields(ref fields)) if fields == &vec!["policyNumber"]
    ));
    assert!(explainer.calls.lock().expect("calls mutex").is_empty());
}

#[tokio::test]
async fn predict_scores_valid_forms() {
    let service = FraudAnalysisService::new(Arc::new(FallbackExplainer));
    let form = ClaimForm::from_claim(&loud_claim());

    let result = service
        .predict(&form, &mut FixedJitter::ZERO)
        .await
        .expect("valid form scores");

    assert_eq!(result.probability, 99);
    assert_eq!(result.explanation, FALLBACK_EXPLANATION);
}

#[tokio::test(start_paused = true)]
async fn processing_delay_overlaps_explanation() {
    let service = FraudAnalysisService::new(Arc::new(FallbackExplainer))
        .with_processing_delay(Duration::from_millis(1500));
    assert_eq!(service.processing_delay(), Duration::from_millis(1500));

    let started = tokio::time::Instant::now();
    let result = service.analyze(&quiet_claim(), &mut FixedJitter::ZERO).await;

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(result.probability, 15);
}
