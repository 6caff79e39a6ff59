use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const WELCOME_TEXT: &str = "Welcome to the Express API!";
pub const HELLO_MESSAGE: &str = "Hello, world!";

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/hello", get(hello))
}

async fn welcome() -> &'static str {
    WELCOME_TEXT
}

async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE,
    })
}
