use axum::{routing::get, Router};

use crate::app::AppState;

mod handlers;
pub(crate) mod types;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(handlers::list_users).post(handlers::create_user),
    )
}
