#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]

extern crate sqlx_core as sqlx;

use sqlx_core::pool::{Pool, PoolOptions};
#[cfg(feature = "postgres")]
use sqlx_postgres::{PgConnectOptions, Postgres};
#[cfg(feature = "sqlite")]
use sqlx_sqlite::{Sqlite, SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use std::str::FromStr;
#[cfg(feature = "sqlite")]
use std::time::Duration;

mod backend;
#[cfg(all(feature = "postgres", feature = "sqlite"))]
mod database;
#[cfg(feature = "sqlite")]
pub mod local;
#[cfg(feature = "postgres")]
pub mod repo;
pub mod services;

pub use backend::{Backend, ConnectError};
#[cfg(all(feature = "postgres", feature = "sqlite"))]
pub use database::Database;

#[cfg(feature = "sqlite")]
pub type SqlitePool = Pool<Sqlite>;
#[cfg(feature = "postgres")]
pub type PgPool = Pool<Postgres>;

/// Connects with the pool's stock options; sizing and timeouts are left to
/// sqlx.
#[cfg(feature = "postgres")]
pub async fn connect_postgres(url: &str) -> Result<PgPool, sqlx_core::Error> {
    let options = PgConnectOptions::from_str(url)?;
    PoolOptions::new().connect_with(options).await
}

#[cfg(feature = "sqlite")]
pub async fn connect_sqlite(url: &str) -> Result<SqlitePool, sqlx_core::Error> {
    connect_sqlite_with_max(url, 10).await
}

#[cfg(feature = "sqlite")]
pub async fn connect_sqlite_with_max(
    url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx_core::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    PoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

#[cfg(feature = "postgres")]
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx_core::migrate::MigrateError> {
    sqlx_macros::migrate!("./migrations/postgres")
        .run(pool)
        .await
}

#[cfg(feature = "sqlite")]
pub async fn migrate_local(pool: &SqlitePool) -> Result<(), sqlx_core::migrate::MigrateError> {
    sqlx_macros::migrate!("./migrations/sqlite")
        .run(pool)
        .await
}
