//! Guarded task engine
//!
//! Binds a primary task to its input and output guards and runs the whole
//! flow: input guards first, then the task, then output guards. The first
//! tripped guard aborts the flow with a [`Blocked`] outcome carrying its
//! justification.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    classifier::Classifier,
    error::GuardError,
    outcome::{Blocked, GuardStage, RunOutcome},
    task::Task,
    Result, Verdict,
};

/// Configuration for the guarded run engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Deadline per classifier call
    ///
    /// Each check is a remote call to a model provider; the deadline bounds
    /// worst-case latency. `None` disables the deadline.
    pub classifier_timeout: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classifier_timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// A primary task bound to its guardrails
///
/// Holds no mutable state between calls; every invocation produces fresh
/// verdicts and a fresh outcome. Dropping the future returned by [`run`]
/// cancels any in-flight classifier or task call.
///
/// [`run`]: GuardedTask::run
pub struct GuardedTask {
    /// The primary work being gated
    task: Arc<dyn Task>,

    /// Guards run against the caller's request
    input_guards: Vec<Arc<dyn Classifier>>,

    /// Guards run against the task's candidate result
    output_guards: Vec<Arc<dyn Classifier>>,

    /// Engine configuration
    config: EngineConfig,
}

impl GuardedTask {
    /// Create a new builder
    pub fn builder() -> GuardedTaskBuilder {
        GuardedTaskBuilder::new()
    }

    /// Number of input guards
    pub fn input_guard_count(&self) -> usize {
        self.input_guards.len()
    }

    /// Number of output guards
    pub fn output_guard_count(&self) -> usize {
        self.output_guards.len()
    }

    /// Run the guarded flow against a request
    ///
    /// 1. Every input guard checks the request. The first trip aborts
    ///    before the primary task starts.
    /// 2. The primary task runs.
    /// 3. Every output guard checks the candidate result. The first trip
    ///    discards the candidate; the caller never sees its content.
    /// 4. Otherwise the unmodified task result is returned.
    ///
    /// A classifier or task failure is a [`GuardError`], distinguishable
    /// from a policy block and never downgraded to a pass.
    pub async fn run(&self, request: &str) -> Result<RunOutcome> {
        for guard in &self.input_guards {
            let verdict = self.classify(guard.as_ref(), request).await?;
            if verdict.tripwire {
                tracing::warn!(
                    "Input guard {} tripped: {}",
                    guard.name(),
                    verdict.reasoning
                );
                return Ok(RunOutcome::Blocked(Blocked::from_verdict(
                    GuardStage::Input,
                    guard.name(),
                    verdict,
                )));
            }
            tracing::debug!("Input guard {} passed", guard.name());
        }

        let candidate = self.task.run(request).await?;
        tracing::debug!("Task {} produced a candidate result", self.task.name());

        for guard in &self.output_guards {
            let verdict = self.classify(guard.as_ref(), &candidate.content).await?;
            if verdict.tripwire {
                tracing::warn!(
                    "Output guard {} tripped: {}",
                    guard.name(),
                    verdict.reasoning
                );
                // candidate is dropped here; the caller only gets the block
                return Ok(RunOutcome::Blocked(Blocked::from_verdict(
                    GuardStage::Output,
                    guard.name(),
                    verdict,
                )));
            }
            tracing::debug!("Output guard {} passed", guard.name());
        }

        Ok(RunOutcome::Completed(candidate))
    }

    /// Run a single classifier under the configured deadline
    async fn classify(&self, guard: &dyn Classifier, subject: &str) -> Result<Verdict> {
        match self.config.classifier_timeout {
            Some(deadline) => tokio::time::timeout(deadline, guard.classify(subject))
                .await
                .map_err(|_| GuardError::ClassifierTimeout {
                    guard: guard.name().to_string(),
                    seconds: deadline.as_secs(),
                })?,
            None => guard.classify(subject).await,
        }
    }
}

/// Builder for constructing a [`GuardedTask`]
pub struct GuardedTaskBuilder {
    task: Option<Arc<dyn Task>>,
    input_guards: Vec<Arc<dyn Classifier>>,
    output_guards: Vec<Arc<dyn Classifier>>,
    config: EngineConfig,
}

impl GuardedTaskBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            task: None,
            input_guards: Vec::new(),
            output_guards: Vec::new(),
            config: EngineConfig::default(),
        }
    }

    /// Set the primary task
    pub fn task<T: Task + 'static>(mut self, task: T) -> Self {
        self.task = Some(Arc::new(task));
        self
    }

    /// Add an input guard
    pub fn input_guard<C: Classifier + 'static>(mut self, guard: C) -> Self {
        self.input_guards.push(Arc::new(guard));
        self
    }

    /// Add an output guard
    pub fn output_guard<C: Classifier + 'static>(mut self, guard: C) -> Self {
        self.output_guards.push(Arc::new(guard));
        self
    }

    /// Set the per-classifier deadline
    pub fn classifier_timeout(mut self, deadline: Duration) -> Self {
        self.config.classifier_timeout = Some(deadline);
        self
    }

    /// Disable the per-classifier deadline
    pub fn no_classifier_timeout(mut self) -> Self {
        self.config.classifier_timeout = None;
        self
    }

    /// Set the engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the guarded task
    pub fn build(self) -> Result<GuardedTask> {
        let task = self
            .task
            .ok_or_else(|| GuardError::config("Primary task not set"))?;

        Ok(GuardedTask {
            task,
            input_guards: self.input_guards,
            output_guards: self.output_guards,
            config: self.config,
        })
    }
}

impl Default for GuardedTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubTask {
        reply: String,
        calls: Arc<AtomicUsize>,
    }

    impl StubTask {
        fn new(reply: &str) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    reply: reply.to_string(),
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl Task for StubTask {
        fn name(&self) -> &str {
            "stub_task"
        }

        async fn run(&self, _request: &str) -> Result<TaskResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(TaskResult::new(self.reply.clone()))
        }
    }

    struct StubClassifier {
        name: &'static str,
        trip: bool,
        calls: Arc<AtomicUsize>,
    }

    impl StubClassifier {
        fn passing(name: &'static str) -> Self {
            Self {
                name,
                trip: false,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn tripping(name: &'static str) -> Self {
            Self {
                name,
                trip: true,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn counted(mut self) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            self.calls = Arc::clone(&calls);
            (self, calls)
        }
    }

    #[async_trait]
    impl Classifier for StubClassifier {
        fn name(&self) -> &str {
            self.name
        }

        async fn classify(&self, _subject: &str) -> Result<Verdict> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.trip {
                Ok(Verdict::trip(format!("{} policy matched", self.name)))
            } else {
                Ok(Verdict::pass("nothing to flag"))
            }
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl Classifier for FailingClassifier {
        fn name(&self) -> &str {
            "failing"
        }

        async fn classify(&self, _subject: &str) -> Result<Verdict> {
            Err(GuardError::LLM(gate_llm::LLMError::Timeout))
        }
    }

    struct SlowClassifier;

    #[async_trait]
    impl Classifier for SlowClassifier {
        fn name(&self) -> &str {
            "slow"
        }

        async fn classify(&self, _subject: &str) -> Result<Verdict> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Verdict::pass("eventually"))
        }
    }

    #[tokio::test]
    async fn test_no_guards_passes_through() {
        let (task, _) = StubTask::new("4");
        let guarded = GuardedTask::builder().task(task).build().unwrap();

        let outcome = guarded.run("what is 2+2").await.unwrap();
        assert_eq!(outcome.task_result().unwrap().content, "4");
    }

    #[tokio::test]
    async fn test_passing_guards_return_unmodified_result() {
        let (task, _) = StubTask::new("4");
        let guarded = GuardedTask::builder()
            .task(task)
            .input_guard(StubClassifier::passing("input_check"))
            .output_guard(StubClassifier::passing("output_check"))
            .build()
            .unwrap();

        let outcome = guarded.run("what is 2+2").await.unwrap();
        assert!(!outcome.is_blocked());
        assert_eq!(outcome.task_result().unwrap().content, "4");
    }

    #[tokio::test]
    async fn test_input_trip_skips_task() {
        let (task, task_calls) = StubTask::new("never seen");
        let guarded = GuardedTask::builder()
            .task(task)
            .input_guard(StubClassifier::tripping("homework_check"))
            .build()
            .unwrap();

        let outcome = guarded.run("solve my homework: 12 x 8").await.unwrap();
        match outcome {
            RunOutcome::Blocked(blocked) => {
                assert_eq!(blocked.stage, GuardStage::Input);
                assert_eq!(blocked.guard, "homework_check");
            }
            RunOutcome::Completed(_) => panic!("expected a block"),
        }
        assert_eq!(task_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_input_trip_short_circuits_later_guards() {
        let (second, second_calls) = StubClassifier::passing("second").counted();
        let (task, _) = StubTask::new("x");
        let guarded = GuardedTask::builder()
            .task(task)
            .input_guard(StubClassifier::tripping("first"))
            .input_guard(second)
            .build()
            .unwrap();

        let outcome = guarded.run("anything").await.unwrap();
        assert!(outcome.is_blocked());
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_output_trip_hides_candidate() {
        let (task, task_calls) = StubTask::new("flagged term inside");
        let guarded = GuardedTask::builder()
            .task(task)
            .output_guard(StubClassifier::tripping("sensitive_words"))
            .build()
            .unwrap();

        let outcome = guarded.run("tell me something").await.unwrap();
        match outcome {
            RunOutcome::Blocked(blocked) => {
                assert_eq!(blocked.stage, GuardStage::Output);
                // the candidate content must not leak through the block
                assert!(!blocked.reasoning.contains("flagged term inside"));
                assert!(blocked
                    .info
                    .as_ref()
                    .map_or(true, |i| !i.to_string().contains("flagged term inside")));
            }
            RunOutcome::Completed(_) => panic!("expected a block"),
        }
        assert_eq!(task_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_classifier_failure_is_not_a_pass() {
        let (task, task_calls) = StubTask::new("x");
        let guarded = GuardedTask::builder()
            .task(task)
            .input_guard(FailingClassifier)
            .build()
            .unwrap();

        let result = guarded.run("anything").await;
        assert!(matches!(result, Err(GuardError::LLM(_))));
        assert_eq!(task_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_classifier_timeout() {
        let (task, _) = StubTask::new("x");
        let guarded = GuardedTask::builder()
            .task(task)
            .input_guard(SlowClassifier)
            .classifier_timeout(Duration::from_millis(10))
            .build()
            .unwrap();

        let result = guarded.run("anything").await;
        match result {
            Err(GuardError::ClassifierTimeout { guard, .. }) => assert_eq!(guard, "slow"),
            other => panic!("expected timeout, got {:?}", other.map(|o| o.is_blocked())),
        }
    }

    #[tokio::test]
    async fn test_builder_missing_task() {
        let result = GuardedTask::builder()
            .input_guard(StubClassifier::passing("check"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_default_engine_config() {
        let config = EngineConfig::default();
        assert_eq!(config.classifier_timeout, Some(Duration::from_secs(30)));
    }
}
