//! Brand kit generation — orchestrates the request/response cycle.
//!
//! Flow: credential check → build prompt → provider call → validate output.
//! Every failure is classified into exactly one `AppError` variant; there
//! are no partial results and no streaming.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::brief::BrandBrief;
use crate::generation::prompts::{build_brand_kit_prompt, BRAND_KIT_SYSTEM};
use crate::generation::validator::{validate_kit, Strictness};
use crate::llm_client::{CompletionClient, LlmError, RetryPolicy};

/// The generation pipeline. Stateless across calls: each `generate` runs
/// independently, suspending only at the provider call.
///
/// The credential is injected at construction. Nothing in the pipeline
/// reads ambient environment state at call time.
#[derive(Clone)]
pub struct BrandKitService {
    client: Arc<dyn CompletionClient>,
    api_key: Option<String>,
    retry: RetryPolicy,
    strictness: Strictness,
}

impl BrandKitService {
    pub fn new(api_key: Option<String>, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            api_key,
            retry: RetryPolicy::default(),
            strictness: Strictness::default(),
        }
    }

    /// Overrides the provider attempt policy. Nothing overrides it in
    /// production yet — requests get the single-attempt default.
    #[allow(dead_code)]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Overrides output validation strictness.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Generates one brand kit. Returns the decoded kit value or one
    /// classified failure. A missing credential fails before any outbound
    /// call is made.
    pub async fn generate(&self, brief: &BrandBrief) -> Result<Value, AppError> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        let prompt = build_brand_kit_prompt(brief);
        debug!("built brand kit prompt ({} bytes)", prompt.len());

        let raw = self.call_provider(api_key, &prompt).await?;

        let kit = validate_kit(&raw, self.strictness)?;
        info!("brand kit generated");

        Ok(kit)
    }

    /// Calls the provider under the configured attempt policy. The default
    /// policy is one best-effort attempt with no backoff, so any provider
    /// fault is terminal for the request.
    async fn call_provider(&self, api_key: &str, prompt: &str) -> Result<String, AppError> {
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..self.retry.max_attempts {
            if attempt > 0 {
                if let Some(backoff) = self.retry.backoff {
                    tokio::time::sleep(backoff).await;
                }
            }

            match self.client.complete(api_key, BRAND_KIT_SYSTEM, prompt).await {
                Ok(raw) => return Ok(raw),
                Err(e) => last_error = Some(e),
            }
        }

        Err(match last_error {
            Some(LlmError::EmptyContent) => AppError::EmptyResponse,
            Some(e) => AppError::Provider(e.to_string()),
            // max_attempts of 0 never dials out; treat as a provider fault
            None => AppError::Provider("no provider attempts were made".to_string()),
        })
    }
}
