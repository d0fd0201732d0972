//! Optimization client: pluggable, trait-based seam around the model call.
//!
//! Default: `GeminiOptimizer` (one `generateContent` call per attempt).
//! The workflow holds an `Arc<dyn OptimizationClient>`, so tests swap in a fake.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::intake::ResumeDocument;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_FABRICATION_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError, Prompt};
use crate::models::resume::OptimizationResult;
use crate::optimization::prompts::{OPTIMIZATION_PROMPT_TEMPLATE, OPTIMIZATION_SYSTEM};
use crate::optimization::schema::optimization_response_schema;

#[derive(Debug, Error)]
pub enum OptimizationError {
    #[error("model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("model response is missing required field {0}")]
    MissingField(&'static str),

    /// The task running the call panicked or was cancelled.
    #[error("optimization task aborted: {0}")]
    Aborted(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Submits one résumé and one job description, yielding a full result or
/// nothing. The 50-character job-description minimum is the caller's job.
#[async_trait]
pub trait OptimizationClient: Send + Sync {
    async fn optimize(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<OptimizationResult, OptimizationError>;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiOptimizer
// ────────────────────────────────────────────────────────────────────────────

pub struct GeminiOptimizer {
    llm: LlmClient,
    response_schema: Value,
}

impl GeminiOptimizer {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            response_schema: optimization_response_schema(),
        }
    }
}

#[async_trait]
impl OptimizationClient for GeminiOptimizer {
    async fn optimize(
        &self,
        document: &ResumeDocument,
        job_description: &str,
    ) -> Result<OptimizationResult, OptimizationError> {
        let text = build_prompt(job_description);
        let prompt = Prompt {
            system: OPTIMIZATION_SYSTEM,
            text: &text,
            document: Some(document.as_inline()),
            response_schema: Some(&self.response_schema),
        };

        let result: OptimizationResult = self.llm.call_json(&prompt).await?;
        if let Some(field) = result.optimized_resume.missing_required_field() {
            return Err(OptimizationError::MissingField(field));
        }

        info!(
            "Optimization succeeded: score={} extracted={} missing={}",
            result.match_score,
            result.extracted_keywords.len(),
            result.missing_keywords.len()
        );
        Ok(result)
    }
}

fn build_prompt(job_description: &str) -> String {
    OPTIMIZATION_PROMPT_TEMPLATE
        .replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION)
        .replace("{json_only}", JSON_ONLY_SYSTEM)
        .replace("{job_description}", job_description)
}
