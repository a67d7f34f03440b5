//! LLM Provider trait definition

use async_trait::async_trait;

use crate::{Message, Response, Result};

/// Trait for LLM providers
///
/// Implementations provide a unified interface for different chat-completion
/// services. Both the primary task and any model-backed guardrail classifier
/// go through this trait.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Send a message and wait for the complete response
    ///
    /// # Arguments
    /// * `messages` - Conversation history including the new message
    ///
    /// # Returns
    /// The complete response from the LLM
    ///
    /// # Example
    /// ```no_run
    /// use gate_llm::{LLMProvider, Message};
    ///
    /// async fn example(provider: &dyn LLMProvider) -> Result<(), Box<dyn std::error::Error>> {
    ///     let messages = vec![Message::user("Hello!")];
    ///     let response = provider.send_message(messages).await?;
    ///     println!("{}", response.content);
    ///     Ok(())
    /// }
    /// ```
    async fn send_message(&self, messages: Vec<Message>) -> Result<Response>;

    /// Get the model name/identifier
    fn model(&self) -> &str;

    /// Get the provider name
    fn name(&self) -> &str;
}
