use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use registry_core::UserStore;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub config: ServerConfig,
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.server.max_body_bytes;
    crate::http::router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
}
