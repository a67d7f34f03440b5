//! Classification verdicts

use serde::{Deserialize, Serialize};

/// Result of a single guardrail check
///
/// Produced fresh per check and discarded after the engine consumes it;
/// nothing is retained across invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the policy predicate matched, blocking the flow
    pub tripwire: bool,

    /// Human-readable justification for the decision
    pub reasoning: String,

    /// Raw classifier payload (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,

    /// When the check ran
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl Verdict {
    /// Create a new verdict
    pub fn new(tripwire: bool, reasoning: impl Into<String>) -> Self {
        Self {
            tripwire,
            reasoning: reasoning.into(),
            info: None,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Create a passing verdict
    pub fn pass(reasoning: impl Into<String>) -> Self {
        Self::new(false, reasoning)
    }

    /// Create a tripped verdict
    pub fn trip(reasoning: impl Into<String>) -> Self {
        Self::new(true, reasoning)
    }

    /// Attach the classifier's raw payload
    pub fn with_info(mut self, info: serde_json::Value) -> Self {
        self.info = Some(info);
        self
    }
}
