//! Keyword guard demo
//!
//! Demonstrates the guarded-run flow with rule-based guards only, so no API
//! key is needed.
//!
//! Run with:
//! ```bash
//! cargo run -p gate-guard --example keyword_guard
//! ```

use async_trait::async_trait;
use gate_core::{config::load_config_or_default, init_logging};
use gate_guard::{
    GuardConfig, GuardedTask, KeywordRuleConfig, Result, RunOutcome, Task, TaskResult,
};

/// Stand-in for a real model call
struct CannedAssistant;

#[async_trait]
impl Task for CannedAssistant {
    fn name(&self) -> &str {
        "canned_assistant"
    }

    async fn run(&self, request: &str) -> Result<TaskResult> {
        Ok(TaskResult::new(format!(
            "Here is my answer to '{}': my SSN is 123-45-6789",
            request
        )))
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = load_config_or_default("config.toml");
    init_logging(&config.logging);

    println!("🛡️  Keyword Guard Demo\n");

    let config = GuardConfig {
        enabled: true,
        input_keywords: KeywordRuleConfig {
            enabled: true,
            blocked_phrases: vec!["homework".to_string()],
            ..Default::default()
        },
        output_keywords: KeywordRuleConfig {
            enabled: true,
            // SSN-shaped numbers must never reach the caller
            blocked_patterns: vec![r"\d{3}-\d{2}-\d{4}".to_string()],
            ..Default::default()
        },
        ..Default::default()
    };

    let guarded = config
        .configure(GuardedTask::builder())?
        .task(CannedAssistant)
        .build()?;

    for request in ["solve my homework: 12 x 8", "what is 2+2"] {
        println!("=== Request: {} ===", request);
        match guarded.run(request).await? {
            RunOutcome::Completed(result) => {
                println!("✅ Result: {}\n", result.content);
            }
            RunOutcome::Blocked(blocked) => {
                println!("🚨 Blocked at {} stage by {}", blocked.stage, blocked.guard);
                println!("   Reasoning: {}\n", blocked.reasoning);
            }
        }
    }

    Ok(())
}
