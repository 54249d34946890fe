//! Analysis Requester: builds the prompt, calls the completion service, and checks
//! that the reply is a JSON object. Shaping that object is the normalizer's job.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::analysis::prompts::{match_prompt, review_prompt, MATCH_SYSTEM, REVIEW_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, CompletionRequest, CompletionService};

pub const TEMPERATURE: f32 = 0.7;
pub const REVIEW_MAX_TOKENS: u32 = 1000;
pub const MATCH_MAX_TOKENS: u32 = 2000;

/// Parsed but not yet validated model output, tagged with the mode that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAnalysis {
    Review(Map<String, Value>),
    Match(Map<String, Value>),
}

#[derive(Clone)]
pub struct AnalysisRequester {
    llm: Arc<dyn CompletionService>,
}

impl AnalysisRequester {
    pub fn new(llm: Arc<dyn CompletionService>) -> Self {
        Self { llm }
    }

    /// Resume-only review when `job_description` is `None`, comparative match otherwise.
    pub async fn request_analysis(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<RawAnalysis, AppError> {
        match job_description {
            None => {
                let prompt = review_prompt(resume_text);
                let body = self.call(REVIEW_SYSTEM, &prompt, REVIEW_MAX_TOKENS).await?;
                Ok(RawAnalysis::Review(body))
            }
            Some(job_description) => {
                let prompt = match_prompt(resume_text, job_description);
                let body = self.call(MATCH_SYSTEM, &prompt, MATCH_MAX_TOKENS).await?;
                Ok(RawAnalysis::Match(body))
            }
        }
    }

    async fn call(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<Map<String, Value>, AppError> {
        debug!("Sending analysis prompt ({} chars)", prompt.len());
        let reply = self
            .llm
            .complete(&CompletionRequest {
                system,
                prompt,
                temperature: TEMPERATURE,
                max_tokens,
            })
            .await?;
        debug!("Model reply: {reply}");

        parse_reply(&reply)
    }
}

/// Strips code fences and parses the reply; it must be a JSON object.
fn parse_reply(reply: &str) -> Result<Map<String, Value>, AppError> {
    let cleaned = strip_json_fences(reply);
    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AppError::MalformedModelResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(AppError::MalformedModelResponse(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
