//! `UserStore` implementations. Each store owns a pool handle and turns
//! driver errors into `StoreError`s carrying the database's message.

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "postgres")]
pub use postgres::PgUserStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteUserStore;
