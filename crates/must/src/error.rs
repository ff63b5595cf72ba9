use thiserror::Error;

/// Errors raised while building or installing a [`MustConfig`](crate::MustConfig).
///
/// Violations are never reported through this type; they abort.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("must config already initialized")]
    AlreadyInitialized,

    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
