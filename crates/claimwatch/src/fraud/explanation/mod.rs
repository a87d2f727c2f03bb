//! Natural-language explanations for a scored claim.
//!
//! [`ExplanationProvider`] is infallible from the caller's side: remote
//! failures are logged and replaced by [`FALLBACK_EXPLANATION`].

pub mod gemini;
mod prompts;

pub use gemini::GeminiClient;
pub use prompts::{explanation_prompt, FALLBACK_EXPLANATION, INVESTIGATOR_PERSONA};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::ClaimDetails;

/// Produces the explanation shown next to a prediction. Never fails.
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    async fn explain(&self, claim: &ClaimDetails, probability: u8) -> String;
}

#[async_trait]
impl<P> ExplanationProvider for Arc<P>
where
    P: ExplanationProvider + ?Sized,
{
    async fn explain(&self, claim: &ClaimDetails, probability: u8) -> String {
        (**self).explain(claim, probability).await
    }
}

/// Remote text-generation boundary.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Sampling settings forwarded to the text-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParameters {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub sampling: SamplingParameters,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Malformed(String),

    #[error("response contained no text")]
    Empty,

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Asks a [`TextGenerator`] to explain the score in the voice of a fraud
/// investigator, falling back to a fixed sentence on any failure.
#[derive(Debug, Clone)]
pub struct InvestigatorExplainer<G> {
    generator: G,
    sampling: SamplingParameters,
    timeout: Duration,
}

impl<G: TextGenerator> InvestigatorExplainer<G> {
    pub fn new(generator: G, timeout: Duration) -> Self {
        Self {
            generator,
            sampling: SamplingParameters::default(),
            timeout,
        }
    }

    pub fn with_sampling(mut self, sampling: SamplingParameters) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    async fn request_explanation(
        &self,
        claim: &ClaimDetails,
        probability: u8,
    ) -> Result<String, GenerationError> {
        let request = GenerationRequest {
            system_instruction: INVESTIGATOR_PERSONA.to_string(),
            prompt: explanation_prompt(claim, probability),
            sampling: self.sampling,
        };

        let text = tokio::time::timeout(self.timeout, self.generator.generate(&request))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))??;

        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl<G: TextGenerator> ExplanationProvider for InvestigatorExplainer<G> {
    async fn explain(&self, claim: &ClaimDetails, probability: u8) -> String {
        match self.request_explanation(claim, probability).await {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    error = %err,
                    policy_number = %claim.policy_number,
                    probability,
                    "explanation unavailable; using fallback"
                );
                FALLBACK_EXPLANATION.to_string()
            }
        }
    }
}

/// Offline provider used when no text-generation credentials are configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackExplainer;

#[async_trait]
impl ExplanationProvider for FallbackExplainer {
    async fn explain(&self, _claim: &ClaimDetails, _probability: u8) -> String {
        FALLBACK_EXPLANATION.to_string()
    }
}
