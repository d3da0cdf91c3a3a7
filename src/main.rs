//! sunutech-agent - chat server for the SunuTech support and sales assistant.
//!
//! Configuration comes from `SUNUTECH__*` environment variables (and `.env`).
//! See `sunutech_agent::config::AppConfig`.

use secrecy::ExposeSecret;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use sunutech_agent::adapters::sqlite::{connect, migrate, seed_demo_catalog, SqliteToolStore};
use sunutech_agent::adapters::{
    build_router, ChatAppState, DirectoryContextConfig, DirectoryContextProvider, OpenAIConfig,
    OpenAIProvider, StaticContextProvider,
};
use sunutech_agent::application::Assistant;
use sunutech_agent::config::{AppConfig, RetrievalConfig, ServerConfig, ValidationError};
use sunutech_agent::ports::ContextProvider;

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    // Store
    let pool = connect(&config.database).await?;
    if config.database.run_migrations {
        migrate(&pool).await?;
    }
    if config.database.seed_demo_data {
        let inserted = seed_demo_catalog(&pool).await?;
        tracing::info!(inserted, "Demo catalog check done");
    }
    let store = Arc::new(SqliteToolStore::new(pool));

    // Generation backend
    let api_key = config
        .ai
        .openai_api_key
        .as_ref()
        .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;
    let provider = OpenAIProvider::new(
        OpenAIConfig::new(api_key.expose_secret().clone())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout())
            .with_temperature(config.ai.temperature),
    )?;

    let context = context_provider(&config.retrieval).await?;
    let assistant = Arc::new(Assistant::new(Arc::new(provider), context, store));

    let app = build_router(ChatAppState::new(assistant), &config.server);
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        model = %config.ai.model,
        "sunutech-agent listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn context_provider(config: &RetrievalConfig) -> Result<Arc<dyn ContextProvider>, BoxError> {
    if !config.enabled {
        tracing::info!("Documentation retrieval disabled");
        return Ok(Arc::new(StaticContextProvider::empty()));
    }

    let directory = DirectoryContextConfig::new(config.documents_dir.clone())
        .with_top_k(config.top_k)
        .with_chunking(config.chunk_size, config.chunk_overlap);
    let provider = DirectoryContextProvider::load(&directory).await?;
    Ok(Arc::new(provider))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Keep serving; the process can still be killed.
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
