//! Model-backed classifier
//!
//! Runs a secondary classification call against an LLM provider and parses
//! its answer into a [`Verdict`]. The model is told to answer with a single
//! JSON object; anything that does not carry both required fields is a
//! contract violation, never a permissive "not tripped".

use std::sync::Arc;

use async_trait::async_trait;
use gate_llm::{LLMProvider, Message};

use crate::{classifier::Classifier, GuardError, Result, Verdict};

/// Response format appended to every classifier's instructions
const VERDICT_FORMAT: &str = "Respond with a single JSON object and nothing else: \
{\"tripwire\": <true if the policy matched>, \"reasoning\": \"<clear justification>\"}";

/// LLM-backed guardrail classifier
///
/// The policy lives in the instructions string; the provider decides. Use a
/// temperature of 0.0 on the provider so identically-shaped subjects get
/// identically-shaped verdicts.
pub struct LlmClassifier {
    name: String,
    provider: Arc<dyn LLMProvider>,
    instructions: String,
}

impl LlmClassifier {
    /// Create a new model-backed classifier
    ///
    /// # Arguments
    /// * `name` - Classifier name reported in verdicts and blocks
    /// * `provider` - Backing chat-completions provider
    /// * `instructions` - The policy predicate, e.g. "Check whether the
    ///   user is asking to solve their math homework."
    pub fn new(
        name: impl Into<String>,
        provider: Arc<dyn LLMProvider>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            provider,
            instructions: instructions.into(),
        }
    }
}

#[async_trait]
impl Classifier for LlmClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    async fn classify(&self, subject: &str) -> Result<Verdict> {
        let messages = Message::exchange(
            format!("{}\n\n{}", self.instructions, VERDICT_FORMAT),
            subject,
        );

        let response = self.provider.send_message(messages).await?;
        tracing::debug!("Classifier {} raw verdict: {}", self.name, response.content);

        parse_verdict(&self.name, &response.content)
    }
}

/// Parse a model's answer into a verdict
///
/// Both `tripwire` and `reasoning` are required; a missing or mistyped
/// field is a [`GuardError::MalformedVerdict`].
fn parse_verdict(guard: &str, raw: &str) -> Result<Verdict> {
    let stripped = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(stripped).map_err(|e| {
        GuardError::malformed_verdict(guard.to_string(), format!("not valid JSON: {}", e))
    })?;

    let tripwire = value
        .get("tripwire")
        .and_then(|v| v.as_bool())
        .ok_or_else(|| {
            GuardError::malformed_verdict(
                guard.to_string(),
                "missing boolean field `tripwire`".to_string(),
            )
        })?;

    let reasoning = value
        .get("reasoning")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            GuardError::malformed_verdict(
                guard.to_string(),
                "missing string field `reasoning`".to_string(),
            )
        })?;

    Ok(Verdict::new(tripwire, reasoning).with_info(value))
}

/// Strip a Markdown code fence if the model wrapped its JSON in one
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
