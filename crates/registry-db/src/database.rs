use std::sync::Arc;

use registry_core::UserStore;

use crate::services::{PgUserStore, SqliteUserStore};
use crate::{Backend, ConnectError, PgPool, SqlitePool};

/// A connected pool for whichever backend `DATABASE_URL` selected.
#[derive(Clone)]
pub enum Database {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Database {
    pub async fn connect(url: &str) -> Result<Self, ConnectError> {
        match Backend::from_url(url)? {
            Backend::Postgres => Ok(Self::Postgres(crate::connect_postgres(url).await?)),
            Backend::Sqlite => Ok(Self::Sqlite(crate::connect_sqlite(url).await?)),
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            Self::Postgres(_) => Backend::Postgres,
            Self::Sqlite(_) => Backend::Sqlite,
        }
    }

    pub async fn migrate(&self) -> Result<(), ConnectError> {
        match self {
            Self::Postgres(pool) => crate::migrate(pool).await?,
            Self::Sqlite(pool) => crate::migrate_local(pool).await?,
        }
        Ok(())
    }

    pub fn user_store(&self) -> Arc<dyn UserStore> {
        match self {
            Self::Postgres(pool) => Arc::new(PgUserStore::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteUserStore::new(pool.clone())),
        }
    }

    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
    }
}
