use axum::Router;

use crate::routes;

pub fn build_router() -> Router {
    service_runtime::with_http_layers(routes::router())
}
