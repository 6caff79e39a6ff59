use registry_core::{NewUser, User};

use crate::app::AppState;
use crate::domains::errors::ServiceError;

pub async fn create_user(state: &AppState, new_user: NewUser) -> Result<User, ServiceError> {
    match state.store.create_user(&new_user).await {
        Ok(user) => {
            let user_id = user.id().map(ToString::to_string).unwrap_or_default();
            tracing::info!(event = "users_created", user_id = %user_id, "User created");
            Ok(user)
        }
        Err(err) => {
            tracing::error!(
                event = "users_create_failed",
                backend = state.store.backend(),
                error = %err.message,
                "DB error"
            );
            Err(err.into())
        }
    }
}

pub async fn list_users(state: &AppState) -> Result<Vec<User>, ServiceError> {
    match state.store.list_users().await {
        Ok(users) => {
            tracing::debug!(event = "users_list", count = users.len(), "Users listed");
            Ok(users)
        }
        Err(err) => {
            tracing::error!(
                event = "users_list_failed",
                backend = state.store.backend(),
                error = %err.message,
                "DB error"
            );
            Err(err.into())
        }
    }
}
