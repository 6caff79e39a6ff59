use async_trait::async_trait;
use registry_core::{NewUser, StoreError, StoreResult, User, UserStore};

use crate::repo::UserRepo;
use crate::PgPool;

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, new_user: &NewUser) -> StoreResult<User> {
        UserRepo::new(&self.pool)
            .create(new_user)
            .await
            .map_err(|err| StoreError::database("users_create_failed", &err))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        UserRepo::new(&self.pool)
            .list()
            .await
            .map_err(|err| StoreError::database("users_list_failed", &err))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
