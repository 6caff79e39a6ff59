use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A `users` row exactly as the database returns it, keyed by column name
/// in column order.
///
/// The table may be owned outside this service, so no column set or type
/// is assumed beyond what the row itself reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User {
    columns: Map<String, Value>,
}

impl User {
    pub fn from_columns(columns: Map<String, Value>) -> Self {
        Self { columns }
    }

    pub fn id(&self) -> Option<&Value> {
        self.columns.get("id")
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn columns(&self) -> &Map<String, Value> {
        &self.columns
    }

    pub fn into_columns(self) -> Map<String, Value> {
        self.columns
    }
}

/// Insert input as bound text. Missing fields stay `None` and are bound as
/// SQL `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}
