//! OpenAI chat-completions backend.
//!
//! Any endpoint speaking the `/chat/completions` wire format works; point
//! `OPENAI_BASE_URL` elsewhere to use a compatible server.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CompletionError;
use crate::service::CompletionService;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Build the request for a single user prompt.
pub fn request_body<'a>(model: &'a str, prompt: &'a str) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model,
        messages: vec![RequestMessage {
            role: "user",
            content: prompt,
        }],
    }
}

/// Extract the first choice's text from a `/chat/completions` response body.
pub fn parse_reply(body: &[u8]) -> Result<String, CompletionError> {
    let response: ChatCompletionResponse = serde_json::from_slice(body)?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| CompletionError::ResponseParse("no message content in response".to_string()))
}

pub struct OpenAiCompletion {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiCompletion {
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletion {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %self.model, %url, "requesting completion");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body(&self.model, prompt))
            .send()
            .await
            .map_err(|e| CompletionError::Invocation(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| CompletionError::Invocation(e.to_string()))?;

        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let reply = parse_reply(&body)?;
        info!(model = %self.model, reply_len = reply.len(), "completion received");
        Ok(reply)
    }
}
