//! Integration tests against real completion endpoints.
//!
//! These tests require credentials in the environment (`OPENAI_API_KEY`
//! for OpenAI, the AWS default chain for Bedrock).
//!
//! Run with: `cargo test -p minichat-completion --test live -- --ignored`

use minichat_completion::bedrock::{self, BedrockCompletion};
use minichat_completion::openai::{self, OpenAiCompletion};
use minichat_completion::service::CompletionService;

#[tokio::test]
#[ignore]
async fn openai_replies_to_a_greeting() {
    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
    let service = OpenAiCompletion::new(&api_key, openai::DEFAULT_MODEL, openai::DEFAULT_BASE_URL);

    let reply = service.complete("Say hello in one word.").await.unwrap();
    println!("openai reply: {reply}");
    assert!(!reply.trim().is_empty());
}

#[tokio::test]
#[ignore]
async fn bedrock_replies_to_a_greeting() {
    let client = bedrock::build_client(Some("us-east-1")).await;
    let service = BedrockCompletion::new(client, bedrock::DEFAULT_MODEL_ID);

    let reply = service.complete("Say hello in one word.").await.unwrap();
    println!("bedrock reply: {reply}");
    assert!(!reply.trim().is_empty());
}
