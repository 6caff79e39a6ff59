use registry_server::cli::{self, RunMode};
use registry_server::{bootstrap, settings};

#[tokio::main]
async fn main() {
    let run_mode = cli::parse_args();
    let dotenv = settings::load_dotenv();
    service_runtime::init_tracing(bootstrap::DEFAULT_LOG_FILTER);
    bootstrap::log_dotenv(&dotenv);

    let settings = settings::Settings::from_env();
    if let Err(missing) = settings::preflight(&settings) {
        tracing::error!(
            event = "preflight_failed",
            missing = ?missing,
            "Required configuration missing"
        );
        std::process::exit(1);
    }
    bootstrap::log_startup(&settings, run_mode);

    let db = match bootstrap::connect_db(&settings).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(event = "db_connect_failed", error = %err);
            std::process::exit(1);
        }
    };

    if run_mode == RunMode::Migrate {
        let result = bootstrap::run_migrations(&db).await;
        db.close().await;
        if let Err(err) = result {
            tracing::error!(event = "migrations_failed", error = %err, "migration failed");
            std::process::exit(1);
        }
        return;
    }

    let state = bootstrap::build_state(&settings, &db);
    let app = bootstrap::build_app(state);
    let result = bootstrap::serve(&settings, app).await;
    db.close().await;
    if result.is_err() {
        std::process::exit(1);
    }
}
