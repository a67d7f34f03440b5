//! Guardrail Engine
//!
//! Gates execution of a primary LLM task behind policy classifiers: input
//! guards check the caller's request before the task runs, output guards
//! check the candidate result before the caller sees it. Any tripped guard
//! aborts the flow with a `Blocked` outcome carrying its justification;
//! classifier failures surface as errors, never as silent passes.
//!
//! # Example
//!
//! ```
//! use gate_guard::{GuardedTask, KeywordClassifier};
//! # use gate_guard::{Task, TaskResult, Result};
//! # use async_trait::async_trait;
//! # struct Solver;
//! # #[async_trait]
//! # impl Task for Solver {
//! #     fn name(&self) -> &str { "solver" }
//! #     async fn run(&self, _request: &str) -> Result<TaskResult> {
//! #         Ok(TaskResult::new("4"))
//! #     }
//! # }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let guarded = GuardedTask::builder()
//!     .task(Solver)
//!     .input_guard(KeywordClassifier::new("homework", vec!["homework".to_string()]))
//!     .build()?;
//!
//! let outcome = guarded.run("what is 2+2").await?;
//! assert_eq!(outcome.task_result().unwrap().content, "4");
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod task;
pub mod verdict;

// Built-in classifiers and tasks
pub mod keyword_classifier;
pub mod llm_classifier;
pub mod llm_task;

// Re-exports
pub use classifier::Classifier;
pub use config::{GuardConfig, KeywordRuleConfig};
pub use engine::{EngineConfig, GuardedTask, GuardedTaskBuilder};
pub use error::{GuardError, Result};
pub use outcome::{Blocked, GuardStage, RunOutcome};
pub use task::{Task, TaskResult};
pub use verdict::Verdict;

pub use keyword_classifier::KeywordClassifier;
pub use llm_classifier::LlmClassifier;
pub use llm_task::LlmTask;
