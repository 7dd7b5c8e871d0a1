//! MonsterForge Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monsterforge_engine::api;
use monsterforge_engine::infrastructure::{
    chat_completions::ChatCompletionsClient,
    config::EngineConfig,
    ports::{LlmPort, RandomPort},
    random::SystemRandom,
    resilient_llm::{ResilientLlmClient, RetryConfig},
};
use monsterforge_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monsterforge_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MonsterForge Engine");

    let config = EngineConfig::from_env();

    // Create infrastructure clients
    let chat_client = ChatCompletionsClient::with_timeout(
        &config.llm_base_url,
        &config.llm_model,
        config.llm_timeout_secs,
    )
    .with_api_key(config.llm_api_key.clone())
    .with_referer(config.llm_referer.clone());
    tracing::info!(
        base_url = %config.llm_base_url,
        model = %chat_client.model(),
        timeout_secs = config.llm_timeout_secs,
        "LLM client configured"
    );

    let llm: Arc<dyn LlmPort> = if config.llm_max_retries > 0 {
        let retry_config = RetryConfig::with_max_retries(config.llm_max_retries);
        tracing::info!(
            max_retries = retry_config.max_retries,
            base_delay_ms = retry_config.base_delay.as_millis() as u64,
            "LLM retries enabled"
        );
        Arc::new(ResilientLlmClient::new(Arc::new(chat_client), retry_config))
    } else {
        Arc::new(chat_client)
    };
    let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());

    // Create application
    let app = Arc::new(App::new(llm, random, config.llm_temperature));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.map(str::trim).filter(|s| !s.is_empty())?;

    // Chat webhooks POST JSON, which triggers CORS preflights from browsers.
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
