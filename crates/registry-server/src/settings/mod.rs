use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use registry_db::Backend;

use crate::config::ServerConfig;

mod env_config;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug)]
pub struct Settings {
    pub addr: SocketAddr,
    pub db_url: String,
    pub config: ServerConfig,
}

impl Settings {
    /// Reads the process environment once. Problems that make the service
    /// unusable are left for [`preflight`] to report together.
    #[must_use]
    pub fn from_env() -> Self {
        let addr = service_runtime::env::socket_addr("REGISTRY_ADDR", default_addr());
        let db_url = env::var("DATABASE_URL").unwrap_or_default();
        let config_path =
            env::var("REGISTRY_CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
        let mut config = env_config::load_config(&config_path);
        env_config::apply_server_env_overrides(&mut config);
        env_config::apply_errors_env_overrides(&mut config);

        Self {
            addr,
            db_url,
            config,
        }
    }
}

/// Outcome of reading a `.env` file. Values already present in the process
/// environment always win over the file.
#[derive(Debug)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    Missing,
    Failed(String),
}

/// Looks for `.env` in the working directory and its parents.
pub fn load_dotenv() -> DotenvStatus {
    match dotenvy::dotenv() {
        Ok(path) => DotenvStatus::Loaded(path),
        Err(err) => dotenv_error(err),
    }
}

pub fn load_dotenv_from(path: &Path) -> DotenvStatus {
    match dotenvy::from_path(path) {
        Ok(()) => DotenvStatus::Loaded(path.to_path_buf()),
        Err(err) => dotenv_error(err),
    }
}

fn dotenv_error(err: dotenvy::Error) -> DotenvStatus {
    if err.not_found() {
        DotenvStatus::Missing
    } else {
        DotenvStatus::Failed(err.to_string())
    }
}

pub fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
}

pub fn preflight(settings: &Settings) -> Result<(), Vec<String>> {
    let mut missing = Vec::new();
    if settings.db_url.trim().is_empty() {
        missing.push("DATABASE_URL is required".to_string());
    } else if let Err(err) = Backend::from_url(&settings.db_url) {
        missing.push(format!("DATABASE_URL invalid: {err}"));
    }
    if settings.config.server.max_body_bytes == 0 {
        missing.push("server.max_body_bytes must be greater than zero".to_string());
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}
