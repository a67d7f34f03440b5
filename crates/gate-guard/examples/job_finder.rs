//! Job finder demo with both guard kinds
//!
//! An input guard blocks requests for illegal or unethical jobs; an output
//! guard discards suggestions that look like fake job offers before the
//! caller ever sees them.
//!
//! Provider settings come from `config.toml` if present, with defaults
//! pointing at Gemini.
//!
//! Run with:
//! ```bash
//! GEMINI_API_KEY=your-key cargo run -p gate-guard --example job_finder -- "remote rust jobs"
//! ```

use std::env;
use std::sync::Arc;

use gate_core::config::{load_config_or_default, ProviderConfig};
use gate_core::init_logging;
use gate_guard::{GuardStage, GuardedTask, LlmClassifier, LlmTask, RunOutcome};
use gate_llm::{provider_from_config, LLMError, LLMProvider};

fn provider(
    config: &ProviderConfig,
    temperature: f32,
) -> Result<Arc<dyn LLMProvider>, LLMError> {
    Ok(Arc::new(
        provider_from_config(config)?.with_temperature(temperature),
    ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_or_default("config.toml");
    init_logging(&config.logging);

    let request = env::args()
        .nth(1)
        .unwrap_or_else(|| "remote rust jobs".to_string());

    let illegal_job_guard = LlmClassifier::new(
        "illegal_job_guardrail",
        provider(&config.provider, 0.0)?,
        "Check if the user is asking for an illegal or unethical job.",
    );

    let fake_job_guard = LlmClassifier::new(
        "fake_job_guardrail",
        provider(&config.provider, 0.0)?,
        "Check if the response contains a fake or unethical job suggestion.",
    );

    let job_finder = LlmTask::new(
        "job_finder",
        provider(&config.provider, 0.7)?,
        "Suggest realistic job leads matching the user's request.",
    );

    let guarded = GuardedTask::builder()
        .task(job_finder)
        .input_guard(illegal_job_guard)
        .output_guard(fake_job_guard)
        .build()?;

    println!("Job request: {}\n", request);

    match guarded.run(&request).await? {
        RunOutcome::Completed(result) => {
            println!("✅ {}", result.content);
        }
        RunOutcome::Blocked(blocked) => match blocked.stage {
            GuardStage::Input => {
                println!("❌ Illegal job guardrail tripped - request blocked.");
                println!("   Reasoning: {}", blocked.reasoning);
            }
            GuardStage::Output => {
                println!("❌ Fake job guardrail tripped - suggestion discarded.");
                println!("   Reasoning: {}", blocked.reasoning);
            }
        },
    }

    Ok(())
}
