use std::sync::Arc;

use minichat_completion::service::CompletionService;
use minichat_storage::store::ChatStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Both handles are built once at process start and reused by every
/// invocation the runtime routes to this process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ChatStore>,
    pub completion: Arc<dyn CompletionService>,
}
