use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_ai_gateway::cache::ResponseCache;
use product_ai_gateway::clients::{GoogleVisionClient, OpenAiClient};
use product_ai_gateway::config::Args;
use product_ai_gateway::router;
use product_ai_gateway::state::AppState;
use product_ai_gateway::store::MemoryStore;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_ai_gateway=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // parse cli arguments
    let args = Args::parse();

    let client = reqwest::Client::builder()
        .timeout(args.upstream_timeout())
        .build()
        .map_err(std::io::Error::other)?;

    if args.completion_key.is_empty() {
        warn!("no completion API key configured");
    }
    if args.vision_token.is_empty() {
        warn!("no vision access token configured");
    }

    // creating shared state
    let state = Arc::new(AppState {
        api_key: args.api_key.clone(),
        cache: ResponseCache::new(Arc::new(MemoryStore::new())),
        completion: Arc::new(OpenAiClient::new(
            client.clone(),
            args.completion_url.clone(),
            args.completion_key.clone(),
            args.completion_model.clone(),
        )),
        vision: Arc::new(GoogleVisionClient::new(
            client,
            args.vision_url.clone(),
            args.vision_token.clone(),
        )),
    });

    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(port = args.port, "gateway running");
    info!(url = %args.completion_url, model = %args.completion_model, "completion upstream");
    info!(url = %args.vision_url, "vision upstream");

    axum::serve(listener, app).await
}
