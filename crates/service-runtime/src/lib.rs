#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! Process plumbing shared by the HTTP services in this workspace: log
//! subscriber setup, the common tower layer stack, listener binding and
//! graceful shutdown.

pub mod env;
mod layers;
mod server;
mod telemetry;

pub use layers::with_http_layers;
pub use server::{bind, serve, shutdown_signal};
pub use telemetry::init_tracing;
