//! LLM-backed primary task

use std::sync::Arc;

use async_trait::async_trait;
use gate_llm::{LLMProvider, Message};

use crate::{
    task::{Task, TaskResult},
    Result,
};

/// Primary task backed by an LLM provider
///
/// The expected production wiring: an instructions string plus the caller's
/// request become a single completion call whose answer is the candidate
/// result the output guards inspect.
pub struct LlmTask {
    name: String,
    provider: Arc<dyn LLMProvider>,
    instructions: String,
}

impl LlmTask {
    /// Create a new LLM-backed task
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
impl Task for LlmTask {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, request: &str) -> Result<TaskResult> {
        let messages = Message::exchange(self.instructions.clone(), request);

        let response = self.provider.send_message(messages).await?;
        tracing::info!("Task {} answered via {}", self.name, response.model);

        Ok(TaskResult::new(response.content))
    }
}
