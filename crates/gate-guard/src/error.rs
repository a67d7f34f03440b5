//! Error types for guard operations
//!
//! A tripped guardrail is not an error; it is the `Blocked` variant of
//! [`crate::RunOutcome`]. Everything in here is an infrastructure failure:
//! the classifier or task provider broke, timed out, or returned a verdict
//! the engine cannot trust.

use gate_llm::LLMError;

/// Result type for guard operations
pub type Result<T> = std::result::Result<T, GuardError>;

/// Errors that can occur while running a guarded task
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// The backing LLM call of a classifier or task failed
    #[error("LLM error: {0}")]
    LLM(#[from] LLMError),

    /// A classifier exceeded its deadline
    #[error("Classifier '{guard}' timed out after {seconds}s")]
    ClassifierTimeout { guard: String, seconds: u64 },

    /// A classifier returned a verdict missing required fields
    ///
    /// Never downgraded to "not tripped": a permissive default on malformed
    /// data would defeat the guard's purpose.
    #[error("Classifier '{guard}' returned a malformed verdict: {detail}")]
    MalformedVerdict { guard: String, detail: String },

    /// Guard configuration error
    #[error("Guard configuration error: {0}")]
    Config(String),
}

impl GuardError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a malformed-verdict error
    pub fn malformed_verdict<S: Into<String>>(guard: S, detail: S) -> Self {
        Self::MalformedVerdict {
            guard: guard.into(),
            detail: detail.into(),
        }
    }
}
