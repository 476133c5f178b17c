use thiserror::Error;

use crate::domain::Backend;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{var} not set")]
    CredentialMissing { var: &'static str },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("{backend} returned no completion")]
    EmptyResult { backend: Backend },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
