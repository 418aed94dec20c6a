pub mod convert;
pub mod health;
pub mod page;

use std::sync::Arc;

use axum::Router;
use readmegen_service::Converter;
use tower_http::trace::TraceLayer;

pub struct InnerAppState {
    pub converter: Arc<dyn Converter>,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(converter: Arc<dyn Converter>) -> Router {
    let state = Arc::new(InnerAppState { converter });

    Router::new()
        .merge(page::routes())
        .merge(health::routes())
        .merge(convert::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
