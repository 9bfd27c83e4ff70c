use anyhow::Result;
use std::sync::Arc;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use newslens::{
    analysis,
    app_state::AppState,
    config::Config,
    llm::{GeminiProvider, ModelProvider, PerplexityProvider},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // One configured client per provider, reused across all requests.
    let general: Arc<dyn ModelProvider + Send + Sync> = Arc::new(GeminiProvider::new(
        config.gemini_base_url(),
        config.gemini_model(),
        config.gemini_api_key(),
    ));
    let grounded: Arc<dyn ModelProvider + Send + Sync> = Arc::new(PerplexityProvider::new(
        config.perplexity_base_url(),
        config.perplexity_model(),
        config.perplexity_api_key(),
    ));
    let state = AppState::new(general, grounded);

    let app = analysis::router(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "newslens listening");
    axum::serve(listener, app).await?;

    Ok(())
}
