//! Primary task trait definition

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Result produced by a primary task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    /// The produced content
    pub content: String,

    /// Structured payload, if the task produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
}

impl TaskResult {
    /// Create a new task result
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            info: None,
        }
    }

    /// Attach a structured payload
    pub fn with_info(mut self, info: serde_json::Value) -> Self {
        self.info = Some(info);
        self
    }
}

/// Trait for the primary work being gated
///
/// The engine treats the task as a black box: it accepts the caller's
/// request and asynchronously returns a [`TaskResult`]. Conversation
/// history, if any, is owned by the caller, not by this component.
#[async_trait]
pub trait Task: Send + Sync {
    /// Get the name of this task
    fn name(&self) -> &str;

    /// Execute the task against the caller's request
    async fn run(&self, request: &str) -> Result<TaskResult>;
}
