use std::env;
use std::str::FromStr;
use std::sync::Arc;

use crate::bedrock::{self, BedrockCompletion};
use crate::error::CompletionError;
use crate::openai::{self, OpenAiCompletion};
use crate::service::{CompletionService, EchoCompletion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionProvider {
    OpenAi,
    Bedrock,
    Echo,
}

impl FromStr for CompletionProvider {
    type Err = CompletionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(CompletionProvider::OpenAi),
            "bedrock" => Ok(CompletionProvider::Bedrock),
            "echo" => Ok(CompletionProvider::Echo),
            other => Err(CompletionError::UnknownProvider(other.to_string())),
        }
    }
}

/// Completion settings read from the environment.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub provider: CompletionProvider,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub bedrock_model_id: String,
    pub bedrock_system_prompt: Option<String>,
    pub region: Option<String>,
}

impl CompletionConfig {
    pub fn from_env() -> Result<Self, CompletionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CompletionError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match get("COMPLETION_PROVIDER") {
            Some(value) => value.parse()?,
            None => CompletionProvider::OpenAi,
        };

        let config = Self {
            provider,
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| openai::DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| openai::DEFAULT_BASE_URL.to_string()),
            bedrock_model_id: get("BEDROCK_MODEL_ID")
                .unwrap_or_else(|| bedrock::DEFAULT_MODEL_ID.to_string()),
            bedrock_system_prompt: get("BEDROCK_SYSTEM_PROMPT"),
            region: get("AWS_REGION"),
        };

        if config.provider == CompletionProvider::OpenAi && config.openai_api_key.is_none() {
            return Err(CompletionError::MissingConfig("OPENAI_API_KEY".to_string()));
        }

        Ok(config)
    }
}

/// Build the configured backend. Called once at process start.
pub async fn build_service(
    config: &CompletionConfig,
) -> Result<Arc<dyn CompletionService>, CompletionError> {
    let service: Arc<dyn CompletionService> = match config.provider {
        CompletionProvider::OpenAi => {
            let api_key = config
                .openai_api_key
                .as_deref()
                .ok_or_else(|| CompletionError::MissingConfig("OPENAI_API_KEY".to_string()))?;
            Arc::new(OpenAiCompletion::new(
                api_key,
                &config.openai_model,
                &config.openai_base_url,
            ))
        }
        CompletionProvider::Bedrock => {
            let client = bedrock::build_client(config.region.as_deref()).await;
            let mut service = BedrockCompletion::new(client, &config.bedrock_model_id);
            if let Some(system_prompt) = &config.bedrock_system_prompt {
                service = service.with_system_prompt(system_prompt);
            }
            Arc::new(service)
        }
        CompletionProvider::Echo => Arc::new(EchoCompletion),
    };

    tracing::info!(provider = service.name(), "completion service ready");
    Ok(service)
}
