use async_trait::async_trait;
use registry_core::{NewUser, StoreError, StoreResult, User, UserStore};

use crate::local::LocalUserRepo;
use crate::SqlitePool;

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create_user(&self, new_user: &NewUser) -> StoreResult<User> {
        LocalUserRepo::new(&self.pool)
            .create(new_user)
            .await
            .map_err(|err| StoreError::database("users_create_failed", &err))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        LocalUserRepo::new(&self.pool)
            .list()
            .await
            .map_err(|err| StoreError::database("users_list_failed", &err))
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
