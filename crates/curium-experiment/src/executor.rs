use crate::checkpoint::{CheckpointId, CheckpointSender};
use crate::error::ExperimentResult;
use async_trait::async_trait;

/// The training half of an experiment.
///
/// Invoked once per run. The executor reads its settings from `conf` and
/// hands finished checkpoints to the runner via `ckpt`; every delivered
/// checkpoint is evaluated by the experiment's [`EvaluationExecutor`].
/// Delivering zero checkpoints is valid.
#[async_trait]
pub trait TrainingExecutor<C>: Send + Sync {
    async fn run_training(&self, conf: &C, ckpt: &CheckpointSender) -> ExperimentResult<()>;
}

/// The evaluation half of an experiment.
///
/// Invoked by the runner once per delivered checkpoint, in delivery order,
/// with the checkpoint identifier the invocation is scoped to.
#[async_trait]
pub trait EvaluationExecutor<C>: Send + Sync {
    async fn run_evaluation(&self, conf: &C, ckpt: &CheckpointId) -> ExperimentResult<()>;
}
