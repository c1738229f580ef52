//! Bedrock Converse backend.
//!
//! The Converse API requires an inference profile ID as `model_id`
//! (e.g. `us.anthropic.claude-sonnet-4-20250514-v1:0`); bare foundation
//! model IDs fail with "on-demand throughput isn't supported".

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use tracing::info;

use crate::error::CompletionError;
use crate::service::CompletionService;

pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

pub struct BedrockCompletion {
    client: Client,
    model_id: String,
    system_prompt: Option<String>,
}

impl BedrockCompletion {
    pub fn new(client: Client, model_id: &str) -> Self {
        Self {
            client,
            model_id: model_id.to_string(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: &str) -> Self {
        self.system_prompt = Some(system_prompt.to_string());
        self
    }
}

/// Build a Bedrock runtime client, optionally pinned to a region.
pub async fn build_client(region: Option<&str>) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(aws_config::Region::new(region.to_string()));
    }
    Client::new(&loader.load().await)
}

#[async_trait]
impl CompletionService for BedrockCompletion {
    fn name(&self) -> &'static str {
        "bedrock"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| CompletionError::Invocation(e.to_string()))?;

        let mut request = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message);

        if let Some(system_prompt) = &self.system_prompt {
            request = request.system(SystemContentBlock::Text(system_prompt.clone()));
        }

        let response = request
            .send()
            .await
            .map_err(|e| CompletionError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| CompletionError::ResponseParse("no message in response".to_string()))?;

        let reply = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        info!(model = %self.model_id, reply_len = reply.len(), "completion received");
        Ok(reply)
    }
}
