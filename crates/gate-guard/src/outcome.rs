//! Tagged outcome of a guarded run
//!
//! A block is an expected, frequent outcome, so it is a plain value the
//! caller matches on rather than an error.

use serde::{Deserialize, Serialize};

use crate::{TaskResult, Verdict};

/// Which side of the primary task a guard sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardStage {
    /// Checked the caller's request, before the task ran
    Input,
    /// Checked the task's candidate result
    Output,
}

impl std::fmt::Display for GuardStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardStage::Input => write!(f, "input"),
            GuardStage::Output => write!(f, "output"),
        }
    }
}

/// A policy block produced by a tripped guard
///
/// Carries the tripping guard's justification but never the candidate
/// result content: a blocked candidate is discarded before the caller can
/// observe it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blocked {
    /// Stage at which the flow was blocked
    pub stage: GuardStage,

    /// Name of the guard that tripped
    pub guard: String,

    /// The guard's justification
    pub reasoning: String,

    /// Raw classifier payload, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
}

impl Blocked {
    /// Build a block from a tripped verdict
    pub fn from_verdict(stage: GuardStage, guard: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            stage,
            guard: guard.into(),
            reasoning: verdict.reasoning,
            info: verdict.info,
        }
    }
}

/// Outcome of a guarded run
///
/// A block is not an error; infrastructure failures surface separately as
/// [`crate::GuardError`].
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// No guard tripped; the task's unmodified result
    Completed(TaskResult),
    /// A guard tripped and the flow was aborted
    Blocked(Blocked),
}

impl RunOutcome {
    /// Whether a guard blocked the flow
    pub fn is_blocked(&self) -> bool {
        matches!(self, RunOutcome::Blocked(_))
    }

    /// The task result, if the run completed
    pub fn task_result(&self) -> Option<&TaskResult> {
        match self {
            RunOutcome::Completed(result) => Some(result),
            RunOutcome::Blocked(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_from_verdict() {
        let verdict = Verdict::trip("contains a flagged term")
            .with_info(serde_json::json!({"contains_sensitive_words": true}));
        let blocked = Blocked::from_verdict(GuardStage::Output, "sensitive_words", verdict);

        assert_eq!(blocked.stage, GuardStage::Output);
        assert_eq!(blocked.guard, "sensitive_words");
        assert_eq!(blocked.reasoning, "contains a flagged term");
        assert!(blocked.info.is_some());
    }

    #[test]
    fn test_outcome_accessors() {
        let completed = RunOutcome::Completed(TaskResult::new("4"));
        assert!(!completed.is_blocked());
        assert_eq!(completed.task_result().unwrap().content, "4");

        let blocked = RunOutcome::Blocked(Blocked::from_verdict(
            GuardStage::Input,
            "homework",
            Verdict::trip("homework request"),
        ));
        assert!(blocked.is_blocked());
        assert!(blocked.task_result().is_none());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(GuardStage::Input.to_string(), "input");
        assert_eq!(GuardStage::Output.to_string(), "output");
    }
}
