use async_trait::async_trait;
use thiserror::Error;

use crate::{NewUser, User};

/// A failed store operation. `message` carries the database's own
/// description of the failure (for example `no such table: users`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct StoreError {
    pub kind: &'static str,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn database(kind: &'static str, err: &sqlx_core::Error) -> Self {
        Self::new(kind, database_message(err))
    }
}

/// Driver-level errors carry the server's message without the sqlx
/// "error returned from database:" prefix.
fn database_message(err: &sqlx_core::Error) -> String {
    match err {
        sqlx_core::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts one row and returns it with the database-assigned id.
    async fn create_user(&self, new_user: &NewUser) -> StoreResult<User>;

    /// Every row currently in the table, oldest id first.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    fn backend(&self) -> &'static str;
}
