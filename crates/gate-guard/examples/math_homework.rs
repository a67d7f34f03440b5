//! Math homework input guard demo
//!
//! A solver agent answers basic math questions, but an input guard first
//! classifies the request and blocks direct homework/assignment requests.
//!
//! Provider settings come from `config.toml` if present, with defaults
//! pointing at Gemini.
//!
//! Run with:
//! ```bash
//! GEMINI_API_KEY=your-key cargo run -p gate-guard --example math_homework -- "what is 2+2"
//! ```

use std::env;
use std::sync::Arc;

use gate_core::{config::load_config_or_default, init_logging};
use gate_guard::{GuardedTask, LlmClassifier, LlmTask, RunOutcome};
use gate_llm::{provider_from_config, LLMProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_or_default("config.toml");
    init_logging(&config.logging);

    let question = env::args()
        .nth(1)
        .unwrap_or_else(|| "what is 2+2".to_string());

    // Classifier runs at temperature 0 for stable verdicts
    let guard_provider: Arc<dyn LLMProvider> =
        Arc::new(provider_from_config(&config.provider)?.with_temperature(0.0));
    let solver_provider: Arc<dyn LLMProvider> = Arc::new(provider_from_config(&config.provider)?);

    let homework_guard = LlmClassifier::new(
        "math_homework_guardrail",
        guard_provider,
        "Check whether the user is asking to solve their math homework or an assignment \
         question. If it's a direct request to solve a homework or assignment, the policy \
         matched. If it's just a basic math calculation like '2+2' or 'what is 10 / 2?', \
         it did not. Always provide clear reasoning.",
    );

    let solver = LlmTask::new(
        "math_solver",
        solver_provider,
        "You are a helpful assistant. Solve basic math problems and answer concisely.",
    );

    let guarded = GuardedTask::builder()
        .task(solver)
        .input_guard(homework_guard)
        .build()?;

    println!("Question: {}\n", question);

    match guarded.run(&question).await? {
        RunOutcome::Completed(result) => {
            println!("✅ Agent response: {}", result.content);
        }
        RunOutcome::Blocked(blocked) => {
            println!("🚨 Input guardrail triggered!");
            println!("Reasoning: {}", blocked.reasoning);
        }
    }

    Ok(())
}
