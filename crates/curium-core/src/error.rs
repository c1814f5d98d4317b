use thiserror::Error;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate config field: {0}")]
    DuplicateField(String),

    #[error("invalid value for config field {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
