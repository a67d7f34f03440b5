//! Classifier trait definition

use async_trait::async_trait;

use crate::{Result, Verdict};

/// Trait for guardrail classifiers
///
/// A classifier labels a piece of text against a single policy predicate
/// and returns a [`Verdict`]. The same trait serves input guards (the
/// subject is the caller's request) and output guards (the subject is the
/// primary task's candidate result).
///
/// Implementations must be read-only with respect to the outer system and
/// deterministic enough that re-running an identically-shaped subject
/// yields the same verdict.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Get the name of this classifier
    fn name(&self) -> &str;

    /// Check the subject text against the policy predicate
    ///
    /// # Returns
    /// A verdict, or an error if the classifier itself failed. A failure is
    /// never a verdict: it surfaces as a provider failure instead of
    /// silently passing or silently blocking.
    async fn classify(&self, subject: &str) -> Result<Verdict>;
}
