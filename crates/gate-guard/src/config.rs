//! Configuration for the guard engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{GuardedTaskBuilder, KeywordClassifier, Result};

/// Configuration for the guard engine
///
/// Covers the parts of a guarded run that are data rather than code: the
/// classifier deadline and rule-based keyword guards. Model-backed guards
/// need a constructed provider and are added on the builder directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Enable guardrails globally
    #[serde(default)]
    pub enabled: bool,

    /// Deadline per classifier call, in seconds (0 disables)
    #[serde(default = "default_classifier_timeout_secs")]
    pub classifier_timeout_secs: u64,

    /// Keyword rules applied to the caller's request
    #[serde(default)]
    pub input_keywords: KeywordRuleConfig,

    /// Keyword rules applied to the task's candidate result
    #[serde(default)]
    pub output_keywords: KeywordRuleConfig,
}

/// Keyword rule configuration for one guard stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRuleConfig {
    /// Enable this rule set
    #[serde(default)]
    pub enabled: bool,

    /// Blocked phrases
    #[serde(default)]
    pub blocked_phrases: Vec<String>,

    /// Blocked regex patterns
    #[serde(default)]
    pub blocked_patterns: Vec<String>,

    /// Case sensitive matching
    #[serde(default)]
    pub case_sensitive: bool,
}

fn default_classifier_timeout_secs() -> u64 {
    30
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            classifier_timeout_secs: default_classifier_timeout_secs(),
            input_keywords: KeywordRuleConfig::default(),
            output_keywords: KeywordRuleConfig::default(),
        }
    }
}

impl Default for KeywordRuleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            blocked_phrases: Vec::new(),
            blocked_patterns: Vec::new(),
            case_sensitive: false,
        }
    }
}

impl KeywordRuleConfig {
    /// Build a classifier from this rule set
    fn build(&self, name: &str) -> Result<KeywordClassifier> {
        let mut guard = KeywordClassifier::new(name, self.blocked_phrases.clone())
            .case_sensitive(self.case_sensitive);

        for pattern in &self.blocked_patterns {
            guard = guard.with_pattern(pattern)?;
        }

        Ok(guard)
    }
}

impl GuardConfig {
    /// Apply this configuration to a builder
    ///
    /// Adds the configured keyword guards and classifier deadline. Returns
    /// the builder unchanged when guardrails are disabled.
    pub fn configure(&self, mut builder: GuardedTaskBuilder) -> Result<GuardedTaskBuilder> {
        if !self.enabled {
            return Ok(builder);
        }

        builder = match self.classifier_timeout_secs {
            0 => builder.no_classifier_timeout(),
            secs => builder.classifier_timeout(Duration::from_secs(secs)),
        };

        let mut count = 0;

        if self.input_keywords.enabled {
            builder = builder.input_guard(self.input_keywords.build("input_keywords")?);
            count += 1;
        }

        if self.output_keywords.enabled {
            builder = builder.output_guard(self.output_keywords.build("output_keywords")?);
            count += 1;
        }

        tracing::info!("Configured {} keyword guard(s) from config", count);

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuardedTask, Result, Task, TaskResult};
    use async_trait::async_trait;

    struct NoopTask;

    #[async_trait]
    impl Task for NoopTask {
        fn name(&self) -> &str {
            "noop"
        }

        async fn run(&self, _request: &str) -> Result<TaskResult> {
            Ok(TaskResult::new("ok"))
        }
    }

    #[test]
    fn test_default_config() {
        let config = GuardConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.classifier_timeout_secs, 30);
    }

    #[test]
    fn test_configure_disabled_adds_nothing() {
        let config = GuardConfig::default();
        let builder = config.configure(GuardedTask::builder()).unwrap();
        let guarded = builder.task(NoopTask).build().unwrap();

        assert_eq!(guarded.input_guard_count(), 0);
        assert_eq!(guarded.output_guard_count(), 0);
    }

    #[test]
    fn test_configure_with_keyword_guards() {
        let config = GuardConfig {
            enabled: true,
            input_keywords: KeywordRuleConfig {
                enabled: true,
                blocked_phrases: vec!["homework".to_string()],
                ..Default::default()
            },
            output_keywords: KeywordRuleConfig {
                enabled: true,
                blocked_patterns: vec![r"\d{3}-\d{2}-\d{4}".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        let builder = config.configure(GuardedTask::builder()).unwrap();
        let guarded = builder.task(NoopTask).build().unwrap();

        assert_eq!(guarded.input_guard_count(), 1);
        assert_eq!(guarded.output_guard_count(), 1);
    }

    #[test]
    fn test_configure_invalid_pattern() {
        let config = GuardConfig {
            enabled: true,
            input_keywords: KeywordRuleConfig {
                enabled: true,
                blocked_patterns: vec!["(unclosed".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.configure(GuardedTask::builder()).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = GuardConfig {
            enabled: true,
            input_keywords: KeywordRuleConfig {
                enabled: true,
                blocked_phrases: vec!["bad".to_string()],
                blocked_patterns: vec![r"\d+".to_string()],
                case_sensitive: false,
            },
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GuardConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.input_keywords.blocked_phrases.len(), 1);
    }
}
