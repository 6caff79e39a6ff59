use std::env;
use std::net::SocketAddr;

use tracing::warn;

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Reads a bind address; an unparsable value is logged and replaced by
/// `default`.
pub fn socket_addr(var_name: &str, default: SocketAddr) -> SocketAddr {
    match env::var(var_name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!(event = "config_invalid", field = var_name, value = %value);
            default
        }),
        Err(_) => default,
    }
}

pub fn bool_var(var_name: &str) -> Option<bool> {
    let value = env::var(var_name).ok()?;
    let parsed = parse_bool(&value);
    if parsed.is_none() {
        warn!(event = "config_invalid", field = var_name, value = %value);
    }
    parsed
}
