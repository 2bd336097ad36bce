use std::sync::Arc;

use ledgerd::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let service = Arc::new(LedgerService::new(LogNotificationSink));
    let app = ledgerd::http::router(service);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Ledger service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
