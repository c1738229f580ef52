use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use minichat_lambda::config::{LambdaConfig, StoreBackend};
use minichat_lambda::state::AppState;
use minichat_storage::dynamo::DynamoStore;
use minichat_storage::memory::MemoryStore;
use minichat_storage::store::ChatStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = LambdaConfig::from_env()?;

    let store: Arc<dyn ChatStore> = match config.store {
        StoreBackend::DynamoDb => {
            let client = match config.region.as_deref() {
                Some(region) => minichat_storage::client::build_client_with_region(region).await,
                None => minichat_storage::client::build_client().await,
            };
            tracing::info!(tables = ?config.tables, "using DynamoDB store");
            Arc::new(DynamoStore::new(client, config.tables.clone()))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    let completion = minichat_completion::config::build_service(&config.completion).await?;

    if let Some(stage) = &config.stage {
        tracing::info!(%stage, "serving routes under stage prefix");
    }
    let app = minichat_lambda::app_for_stage(
        AppState { store, completion },
        config.stage.as_deref(),
    );

    match config.listen_addr {
        Some(addr) => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "serving over TCP");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}
