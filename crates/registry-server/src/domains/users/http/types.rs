use registry_core::NewUser;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: String,
}

/// Fields are taken as whatever JSON the caller sent; the database decides
/// whether the value fits the column.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateUserRequest {
    #[serde(default)]
    pub(crate) name: Option<Value>,
    #[serde(default)]
    pub(crate) email: Option<Value>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            name: value.name.and_then(bind_text),
            email: value.email.and_then(bind_text),
        }
    }
}

/// Strings bind as-is, `null` binds as SQL `NULL`, anything else binds as
/// its JSON text.
fn bind_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
