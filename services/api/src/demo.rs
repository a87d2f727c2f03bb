use crate::infra::{explainer_from_config, parse_date, parse_incident_type, ConfiguredExplainer};
use chrono::{Local, NaiveDate};
use clap::Args;
use claimwatch::config::AppConfig;
use claimwatch::error::AppError;
use claimwatch::telemetry;
use claimwatch::fraud::{
    AnalysisSession, ClaimDetails, ClaimValidationError, FallbackExplainer, FixedJitter,
    FraudAnalysisService, IncidentType, PredictionResult, RngJitter,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Policy identifier, e.g. POL-482913
    #[arg(long)]
    pub(crate) policy_number: String,
    /// Claimed amount in dollars
    #[arg(long)]
    pub(crate) claim_amount: f64,
    /// One of the five form incident types (case-insensitive)
    #[arg(long, value_parser = parse_incident_type)]
    pub(crate) incident_type: IncidentType,
    /// Free-text location, e.g. Urban
    #[arg(long)]
    pub(crate) location: String,
    /// Months since the policy was written (fractions allowed)
    #[arg(long)]
    pub(crate) policy_age: f64,
    /// Number of prior claims on the policy
    #[arg(long)]
    pub(crate) previous_claims: u32,
    /// Incident date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) incident_date: Option<NaiveDate>,
    /// Fix the model-variance sample in [0, 1) instead of drawing one
    #[arg(long)]
    pub(crate) jitter: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the model-variance draws so runs are repeatable
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Skip the generative service even when an API key is configured
    #[arg(long)]
    pub(crate) offline: bool,
}

/// Load configuration and install the tracing subscriber for one-shot commands.
pub(crate) fn load_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

pub(crate) async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = load_config()?;
    let service = FraudAnalysisService::new(Arc::new(explainer_from_config(&config.explanation)?));

    let claim = args.to_claim(Local::now().date_naive())?;
    let result = match args.jitter {
        Some(unit) => service.analyze(&claim, &mut FixedJitter(unit)).await,
        None => service.analyze(&claim, &mut RngJitter::from_entropy()).await,
    };

    render_prediction(&claim, &result);
    Ok(())
}

impl ScoreArgs {
    /// Apply the same checks the claim form enforces.
    fn to_claim(&self, today: NaiveDate) -> Result<ClaimDetails, ClaimValidationError> {
        let missing: Vec<&'static str> = [
            ("policyNumber", &self.policy_number),
            ("location", &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(ClaimValidationError::MissingFields(missing));
        }

        for (field, value) in [
            ("claimAmount", self.claim_amount),
            ("policyAge", self.policy_age),
        ] {
            if !value.is_finite() {
                return Err(ClaimValidationError::InvalidNumber {
                    field,
                    value: value.to_string(),
                });
            }
            if value < 0.0 {
                return Err(ClaimValidationError::Negative {
                    field,
                    value: value.to_string(),
                });
            }
        }

        Ok(ClaimDetails {
            policy_number: self.policy_number.trim().to_string(),
            claim_amount: self.claim_amount,
            incident_type: self.incident_type,
            location: self.location.trim().to_string(),
            policy_age_months: self.policy_age,
            previous_claims: self.previous_claims,
            incident_date: self.incident_date.unwrap_or(today),
        })
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = load_config()?;
    let explainer = if args.offline {
        ConfiguredExplainer::Offline(FallbackExplainer)
    } else {
        explainer_from_config(&config.explanation)?
    };
    let service = FraudAnalysisService::new(Arc::new(explainer));
    let session = AnalysisSession::new();
    let mut jitter = match args.seed {
        Some(seed) => RngJitter::seeded(seed),
        None => RngJitter::from_entropy(),
    };

    let today = Local::now().date_naive();
    let default_claim = ClaimDetails::sample(today, &mut rand::thread_rng());
    let high_risk = high_risk_claim(today);

    println!("ClaimWatch demo");
    for (heading, claim) in [("Default sample", &default_claim), ("High-risk sample", &high_risk)] {
        println!("\n{heading}");
        let ticket = session.begin();
        let result = service.analyze(claim, &mut jitter).await;
        session.complete(ticket, result);
        if let Some(result) = session.current() {
            render_prediction(claim, &result);
        }
    }

    let ticket = session.begin();
    let late = service.analyze(&default_claim, &mut jitter).await;
    session.reset();
    if !session.complete(ticket, late) {
        println!("\nForm reset while a prediction was in flight; late result discarded.");
    }

    Ok(())
}

fn high_risk_claim(today: NaiveDate) -> ClaimDetails {
    ClaimDetails {
        policy_number: "POL-907311".to_string(),
        claim_amount: 24_500.0,
        incident_type: IncidentType::SingleVehicleTheft,
        location: "Suburban".to_string(),
        policy_age_months: 3.0,
        previous_claims: 4,
        incident_date: today,
    }
}

pub(crate) fn render_prediction(claim: &ClaimDetails, result: &PredictionResult) {
    println!(
        "  Policy {} | {} | ${:.2} | {} | policy age {} months | {} previous claim(s)",
        claim.policy_number,
        claim.incident_type,
        claim.claim_amount,
        claim.location,
        claim.policy_age_months,
        claim.previous_claims
    );
    println!(
        "  Fraud probability: {}% ({} risk)",
        result.probability, result.risk_level
    );
    println!("  Verdict: {}", result.verdict());
    if !result.factors.is_empty() {
        println!("  Contributing factors:");
        for factor in &result.factors {
            println!("    +{:>2}  {}", factor.points, factor.notes);
        }
    }
    println!("  Investigator notes: {}", result.explanation);
}
