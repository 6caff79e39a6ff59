use axum::Router;
use registry_db::{ConnectError, Database};

use crate::app::{self, AppState};
use crate::cli::RunMode;
use crate::settings::{DotenvStatus, Settings};

pub const DEFAULT_LOG_FILTER: &str = "registry_server=info,tower_http=info,sqlx=warn";

pub fn log_dotenv(status: &DotenvStatus) {
    match status {
        DotenvStatus::Loaded(path) => {
            tracing::info!(event = "dotenv_loaded", path = %path.display());
        }
        DotenvStatus::Missing => {}
        DotenvStatus::Failed(err) => {
            tracing::warn!(event = "dotenv_failed", error = %err, "Ignoring unreadable .env file");
        }
    }
}

pub fn log_startup(settings: &Settings, run_mode: RunMode) {
    tracing::info!(
        event = "server_startup",
        addr = %settings.addr,
        run_mode = ?run_mode,
        max_body_bytes = settings.config.server.max_body_bytes,
        expose_error_details = settings.config.errors.expose_details,
        "Server configuration loaded"
    );
    if settings.config.errors.expose_details {
        tracing::warn!(
            event = "error_details_exposed",
            "Database error messages are returned to callers"
        );
    }
}

pub async fn connect_db(settings: &Settings) -> Result<Database, ConnectError> {
    let db = Database::connect(&settings.db_url).await?;
    tracing::info!(
        event = "db_connected",
        backend = db.backend().as_str(),
        "Database pool ready"
    );
    Ok(db)
}

pub async fn run_migrations(db: &Database) -> Result<(), ConnectError> {
    db.migrate().await?;
    tracing::info!(
        event = "migrations_applied",
        backend = db.backend().as_str(),
        "migrations applied"
    );
    Ok(())
}

pub fn build_state(settings: &Settings, db: &Database) -> AppState {
    AppState {
        store: db.user_store(),
        config: settings.config.clone(),
    }
}

pub fn build_app(state: AppState) -> Router {
    service_runtime::with_http_layers(app::build_router(state))
}

pub async fn serve(settings: &Settings, app: Router) -> std::io::Result<()> {
    let listener = service_runtime::bind(settings.addr).await?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(settings.addr.port());
    tracing::info!(event = "server_ready", addr = %settings.addr, "Server running on port {port}");
    service_runtime::serve(listener, app).await
}
