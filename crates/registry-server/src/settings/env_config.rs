use std::env;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::config::ServerConfig;

pub(super) fn load_config(path: &str) -> ServerConfig {
    if !Path::new(path).exists() {
        return ServerConfig::default();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(event = "config_read_failed", path, error = %err);
            return ServerConfig::default();
        }
    };
    match serde_yaml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            warn!(event = "config_parse_failed", path, error = %err);
            ServerConfig::default()
        }
    }
}

pub(super) fn apply_server_env_overrides(config: &mut ServerConfig) {
    if let Ok(value) = env::var("REGISTRY_MAX_BODY_BYTES") {
        match value.trim().parse::<usize>() {
            Ok(max_body_bytes) => config.server.max_body_bytes = max_body_bytes,
            Err(_) => {
                warn!(
                    event = "config_invalid",
                    field = "REGISTRY_MAX_BODY_BYTES",
                    value = %value
                );
            }
        }
    }
}

pub(super) fn apply_errors_env_overrides(config: &mut ServerConfig) {
    if let Some(expose) = service_runtime::env::bool_var("REGISTRY_EXPOSE_ERROR_DETAILS") {
        config.errors.expose_details = expose;
    }
}
