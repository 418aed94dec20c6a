use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use readmegen_server::config::ServerConfig;
use readmegen_service::{ChatCompletionClient, Converter};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let addr = config.socket_addr()?;
    let endpoint = config.endpoint();
    info!("endpoint: {} (model {})", endpoint.url, endpoint.model);

    let converter: Arc<dyn Converter> = Arc::new(ChatCompletionClient::new(endpoint));

    let listener = TcpListener::bind(addr).await?;
    info!("readmegen-server listening on http://{addr}");

    readmegen_server::serve(listener, converter).await
}
