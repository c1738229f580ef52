use async_trait::async_trait;

use crate::error::CompletionError;

/// Turns one prompt into one reply. No conversation history is sent.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Short identifier used in logs, e.g. `"openai"`.
    fn name(&self) -> &'static str;

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Replies with the prompt itself. For local runs without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoCompletion;

#[async_trait]
impl CompletionService for EchoCompletion {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        Ok(prompt.to_string())
    }
}
