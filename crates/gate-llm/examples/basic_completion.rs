//! Basic LLM completion example
//!
//! This example demonstrates how to use the LLM provider abstraction
//! to send messages and receive responses. Provider settings come from
//! `config.toml` if present; a command line argument overrides them.
//!
//! Run with:
//! ```bash
//! # For Gemini (default)
//! GEMINI_API_KEY=your-key cargo run -p gate-llm --example basic_completion
//!
//! # For OpenAI
//! OPENAI_API_KEY=your-key cargo run -p gate-llm --example basic_completion -- openai
//! ```

use gate_core::config::{load_config_or_default, ProviderConfig};
use gate_core::init_logging;
use gate_llm::{provider_from_config, LLMProvider, Message};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_or_default("config.toml");
    init_logging(&config.logging);

    // A command line argument overrides the configured provider
    if let Some(provider_name) = env::args().nth(1) {
        config.provider = match provider_name.as_str() {
            "gemini" => ProviderConfig::default(),
            "openai" => ProviderConfig {
                name: "openai".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key_env: "OPENAI_API_KEY".to_string(),
                base_url: None,
            },
            other => {
                eprintln!("Unknown provider: {}. Use 'gemini' or 'openai'", other);
                std::process::exit(1);
            }
        };
    }

    println!("🤖 Guardgate LLM Example - Basic Completion");
    println!("Provider: {} ({})\n", config.provider.name, config.provider.model);

    let provider = provider_from_config(&config.provider)?;

    // Create a simple conversation
    let messages = vec![
        Message::system("You are a helpful assistant. Keep answers short."),
        Message::user("What is the capital of France?"),
    ];

    println!("Sending message...\n");
    let response = provider.send_message(messages).await?;

    println!("Response: {}", response.content);
    if let Some(usage) = response.usage {
        println!("Tokens used: {}", usage.total_tokens);
    }

    Ok(())
}
