pub mod config;
mod routes;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use readmegen_service::Converter;
use tokio::net::TcpListener;

pub async fn serve(listener: TcpListener, converter: Arc<dyn Converter>) -> Result<()> {
    let app = routes::build_router(converter);
    axum::serve(listener, app).await?;
    Ok(())
}
