//! LLM Provider Abstraction
//!
//! This crate provides a unified interface for chat-completion providers.
//! The same provider type covers both the primary answering model and the
//! cheaper classification model used by guardrails.
//!
//! # Example
//!
//! ```no_run
//! use gate_llm::{create_provider, LLMProvider, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider("gemini", "your-api-key", "gemini-2.5-flash")?;
//!
//!     let messages = vec![Message::user("Hello, how are you?")];
//!
//!     let response = provider.send_message(messages).await?;
//!     println!("Response: {}", response.content);
//!
//!     Ok(())
//! }
//! ```

use gate_core::config::ProviderConfig;

pub mod error;
pub mod openai;
pub mod provider;
pub mod types;

// Re-exports
pub use error::{LLMError, Result};
pub use openai::{OpenAIProvider, GEMINI_API_BASE, OPENAI_API_BASE};
pub use provider::LLMProvider;
pub use types::{Message, MessageRole, Response, TokenUsage};

/// Create a provider from configuration
///
/// `gemini` uses the same wire format as `openai`, pointed at Google's
/// OpenAI-compatibility endpoint.
pub fn create_provider(
    provider_name: &str,
    api_key: &str,
    model: &str,
) -> Result<Box<dyn LLMProvider>> {
    match provider_name.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAIProvider::new(api_key, model)?)),
        "gemini" => Ok(Box::new(
            OpenAIProvider::new(api_key, model)?.with_base_url(GEMINI_API_BASE),
        )),
        _ => Err(LLMError::UnsupportedProvider(provider_name.to_string())),
    }
}

/// Create a provider from a [`ProviderConfig`]
///
/// Reads the API key from the configured environment variable and applies
/// the config's base URL override, if any. Returns the concrete provider so
/// callers can keep tuning it, e.g. `with_temperature(0.0)` for classifiers.
pub fn provider_from_config(config: &ProviderConfig) -> Result<OpenAIProvider> {
    let api_key = config.api_key()?;

    let mut provider = match config.name.to_lowercase().as_str() {
        "openai" => OpenAIProvider::new(api_key, &config.model)?,
        "gemini" => OpenAIProvider::new(api_key, &config.model)?.with_base_url(GEMINI_API_BASE),
        other => return Err(LLMError::UnsupportedProvider(other.to_string())),
    };

    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    Ok(provider)
}
