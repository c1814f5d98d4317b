use crate::error::{ExperimentError, ExperimentResult};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Opaque identifier for a checkpoint artifact (e.g. a file path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckpointId(pub String);

impl std::fmt::Display for CheckpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CheckpointId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CheckpointId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Handle a training executor uses to hand finished checkpoints to the runner.
///
/// Deliveries reach the runner in invocation order. Cloning is cheap; all
/// clones feed the same run.
#[derive(Debug, Clone)]
pub struct CheckpointSender {
    tx: mpsc::UnboundedSender<CheckpointId>,
}

impl CheckpointSender {
    /// Delivers a checkpoint to the runner, scheduling its evaluation.
    pub fn deliver(&self, ckpt: impl Into<CheckpointId>) -> ExperimentResult<()> {
        self.tx.send(ckpt.into()).map_err(|_| ExperimentError::ChannelClosed)
    }
}

pub(crate) fn channel() -> (CheckpointSender, mpsc::UnboundedReceiver<CheckpointId>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CheckpointSender { tx }, rx)
}
