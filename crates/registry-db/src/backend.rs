use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Picks the driver from the URL scheme. Only the scheme is inspected so
    /// credentials in the URL never reach an error message.
    pub fn from_url(url: &str) -> Result<Self, ConnectError> {
        let scheme = url
            .split_once(':')
            .map(|(scheme, _)| scheme.trim().to_ascii_lowercase())
            .unwrap_or_default();
        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(ConnectError::UnsupportedScheme(scheme)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("unsupported database url scheme: {0:?}")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx_core::Error),
    #[error(transparent)]
    Migrate(#[from] sqlx_core::migrate::MigrateError),
}
