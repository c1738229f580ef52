use std::collections::HashMap;

use minichat_completion::config::{CompletionConfig, CompletionProvider, build_service};
use minichat_completion::error::CompletionError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_to_openai_with_gpt_35() {
    let config = CompletionConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

    assert_eq!(config.provider, CompletionProvider::OpenAi);
    assert_eq!(config.openai_model, "gpt-3.5-turbo");
    assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
}

#[test]
fn openai_without_key_is_rejected() {
    let err = CompletionConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, CompletionError::MissingConfig(ref key) if key == "OPENAI_API_KEY"));
}

#[test]
fn provider_name_is_case_insensitive() {
    let config = CompletionConfig::from_lookup(lookup(&[
        ("COMPLETION_PROVIDER", "Bedrock"),
        ("BEDROCK_MODEL_ID", "us.anthropic.claude-test"),
    ]))
    .unwrap();

    assert_eq!(config.provider, CompletionProvider::Bedrock);
    assert_eq!(config.bedrock_model_id, "us.anthropic.claude-test");
}

#[test]
fn unknown_provider_is_rejected() {
    let err = CompletionConfig::from_lookup(lookup(&[("COMPLETION_PROVIDER", "davinci")])).unwrap_err();
    assert!(matches!(err, CompletionError::UnknownProvider(_)));
}

#[tokio::test]
async fn echo_service_returns_prompt() {
    let config = CompletionConfig::from_lookup(lookup(&[("COMPLETION_PROVIDER", "echo")])).unwrap();
    let service = build_service(&config).await.unwrap();

    assert_eq!(service.name(), "echo");
    assert_eq!(service.complete("hello").await.unwrap(), "hello");
}
