use registry_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ServiceError {
    #[error("db_error: {0}")]
    Db(#[from] StoreError),
}

impl ServiceError {
    /// Text safe to hand back to the caller, honouring
    /// `errors.expose_details`.
    pub fn public_message(&self, expose_details: bool) -> String {
        match self {
            Self::Db(err) if expose_details => err.message.clone(),
            Self::Db(_) => "db_error".to_string(),
        }
    }
}
