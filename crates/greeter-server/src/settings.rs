use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
}

impl Settings {
    /// The port is fixed at 3000; `GREETER_ADDR` only exists so the service
    /// can be moved off it in shared environments.
    pub fn from_env() -> Self {
        Self {
            addr: service_runtime::env::socket_addr("GREETER_ADDR", default_addr()),
        }
    }
}

pub fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
}
