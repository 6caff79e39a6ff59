#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use registry_db::services::SqliteUserStore;
use registry_db::{connect_sqlite_with_max, migrate_local, SqlitePool};
use registry_server::app::AppState;
use registry_server::bootstrap::build_app;
use registry_server::config::ServerConfig;

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("registry_server=debug"))
            .with_test_writer()
            .try_init();
    });
}

pub async fn setup_sqlite(migrated: bool) -> SqlitePool {
    let db_path = std::env::temp_dir().join(format!(
        "registry-server-test-{}.sqlite",
        Uuid::now_v7().simple()
    ));
    let db_url = format!("sqlite://{}", db_path.display());
    let pool = connect_sqlite_with_max(&db_url, 5).await.expect("sqlite");
    if migrated {
        migrate_local(&pool).await.expect("migrate");
    }
    pool
}

pub struct TestApp {
    pub app: axum::Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_options(true, ServerConfig::default()).await
    }

    /// A store pointed at a database without the `users` table, so every
    /// query fails inside the driver.
    pub async fn without_schema() -> Self {
        Self::with_options(false, ServerConfig::default()).await
    }

    /// A database whose `users` table was created by `ddl` rather than by
    /// the shipped migrations.
    pub async fn with_table(ddl: &str) -> Self {
        let app = Self::with_options(false, ServerConfig::default()).await;
        sqlx_core::query::query::<sqlx_sqlite::Sqlite>(ddl)
            .execute(&app.pool)
            .await
            .expect("create table");
        app
    }

    pub async fn with_options(migrated: bool, config: ServerConfig) -> Self {
        init_tracing();
        let pool = setup_sqlite(migrated).await;
        let state = AppState {
            store: Arc::new(SqliteUserStore::new(pool.clone())),
            config,
        };
        Self {
            app: build_app(state),
            pool,
        }
    }

    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("encode json")))
            .expect("request");
        self.send(request).await
    }

    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body)).expect("request");
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json")
        };
        (status, json)
    }
}
