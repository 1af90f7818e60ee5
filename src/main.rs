use std::sync::Arc;

use tokio::net::TcpListener;

use automotive_rag::application::ports::KnowledgeBase;
use automotive_rag::infrastructure::knowledge::StaticKnowledgeBase;
use automotive_rag::infrastructure::observability::{TracingConfig, init_tracing};
use automotive_rag::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Settings::environment()?;
    let settings = Settings::load(environment)?;
    let addr = settings.server.socket_addr().await?;

    init_tracing(&TracingConfig::new(environment, &settings.logging), addr);

    let knowledge_base = Arc::new(StaticKnowledgeBase::new());
    tracing::info!(topics = knowledge_base.len(), "Knowledge base loaded");

    let router = create_router(AppState::new(knowledge_base));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
