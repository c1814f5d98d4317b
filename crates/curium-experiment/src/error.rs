use thiserror::Error;

pub type ExperimentResult<T> = std::result::Result<T, ExperimentError>;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Config(#[from] curium_core::ConfigError),

    #[error("checkpoint channel closed before delivery")]
    ChannelClosed,

    #[error("training task failed: {0}")]
    Training(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
