use super::prelude::*;

pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The row is decoded before commit, so a row the caller never sees is
    /// rolled back.
    pub async fn create(&self, new_user: &NewUser) -> Result<User, sqlx_core::Error> {
        let mut tx = self.pool.begin().await?;
        let user = query_as!(
            User,
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING *
            "#,
            new_user.name.as_deref(),
            new_user.email.as_deref()
        )
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, sqlx_core::Error> {
        query_as!(
            User,
            r#"
            SELECT *
            FROM users
            ORDER BY id ASC
            "#
        )
        .fetch_all(self.pool)
        .await
    }
}
