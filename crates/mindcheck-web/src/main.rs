use std::net::SocketAddr;
use std::sync::Arc;

use mindcheck_bedrock::converse::BedrockFeedback;
use mindcheck_bedrock::feedback::{CachedFeedback, DisabledFeedback, FeedbackProvider};
use tracing_subscriber::EnvFilter;

use mindcheck_web::config::AppConfig;
use mindcheck_web::state::AppState;
use mindcheck_web::{build_router, render};

/// Distinct summaries whose AI feedback is kept in memory.
const FEEDBACK_CACHE_ENTRIES: u64 = 256;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    if config.environment.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if config.ephemeral_secret {
        tracing::warn!("SECRET_KEY not set; using an ephemeral key for this process");
    }

    // Fail fast on a broken template set rather than on first request.
    render::templates()?;

    let feedback: Arc<dyn FeedbackProvider> = match &config.ai {
        Some(ai) => {
            tracing::info!(model = %ai.model_id, region = %ai.region, "ai feedback enabled");
            let client = mindcheck_bedrock::client::build_client_with_region(&ai.region).await;
            let bedrock = BedrockFeedback::new(client, ai.model_id.clone(), ai.timeout);
            Arc::new(CachedFeedback::new(
                Arc::new(bedrock),
                ai.cache_ttl,
                FEEDBACK_CACHE_ENTRIES,
            ))
        }
        None => {
            tracing::info!("ai feedback disabled (BEDROCK_MODEL_ID not set)");
            Arc::new(DisabledFeedback)
        }
    };

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(config, feedback));

    if std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        tracing::info!("starting lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %bind_address, "listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
