use async_trait::async_trait;
use chrono::NaiveDate;
use claimwatch::config::ExplanationConfig;
use claimwatch::fraud::{
    ClaimDetails, ExplanationProvider, FallbackExplainer, GeminiClient, GenerationError,
    IncidentType, InvestigatorExplainer,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Explanation source chosen at startup from the environment.
#[derive(Debug)]
pub(crate) enum ConfiguredExplainer {
    Remote(InvestigatorExplainer<GeminiClient>),
    Offline(FallbackExplainer),
}

impl ConfiguredExplainer {
    pub(crate) fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

#[async_trait]
impl ExplanationProvider for ConfiguredExplainer {
    async fn explain(&self, claim: &ClaimDetails, probability: u8) -> String {
        match self {
            Self::Remote(explainer) => explainer.explain(claim, probability).await,
            Self::Offline(explainer) => explainer.explain(claim, probability).await,
        }
    }
}

pub(crate) fn explainer_from_config(
    config: &ExplanationConfig,
) -> Result<ConfiguredExplainer, GenerationError> {
    match config.api_key.as_deref() {
        Some(api_key) => {
            let client = GeminiClient::new(api_key, config.base_url.as_str(), config.model.as_str())?;
            info!(model = %client.model(), "generative explanations enabled");
            Ok(ConfiguredExplainer::Remote(InvestigatorExplainer::new(
                client,
                config.timeout,
            )))
        }
        None => {
            warn!("no GEMINI_API_KEY configured; explanations use the fixed fallback text");
            Ok(ConfiguredExplainer::Offline(FallbackExplainer))
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_incident_type(raw: &str) -> Result<IncidentType, String> {
    IncidentType::from_label(raw).ok_or_else(|| {
        let known: Vec<&str> = IncidentType::ALL.iter().map(|kind| kind.label()).collect();
        format!("unknown incident type '{raw}' (expected one of: {})", known.join(", "))
    })
}
