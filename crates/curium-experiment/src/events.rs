use serde::{Deserialize, Serialize};

/// Lifecycle events emitted by a running experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExperimentEvent {
    TrainingStarted,
    CheckpointDelivered { ckpt: String },
    EvaluationStarted { ckpt: String },
    EvaluationFinished { ckpt: String },
    TrainingFinished { delivered: u64 },
}

pub trait EventSink: Send + Sync {
    fn on_event(&self, event: ExperimentEvent);
}

#[derive(Debug, Default)]
pub struct StdoutEventSink;

impl EventSink for StdoutEventSink {
    fn on_event(&self, event: ExperimentEvent) {
        match event {
            ExperimentEvent::TrainingStarted => println!("[experiment] training started"),
            ExperimentEvent::CheckpointDelivered { ckpt } => {
                println!("[experiment] checkpoint delivered: {ckpt}");
            }
            ExperimentEvent::EvaluationStarted { ckpt } => {
                println!("[experiment] evaluating: {ckpt}");
            }
            ExperimentEvent::EvaluationFinished { ckpt } => {
                println!("[experiment] evaluated: {ckpt}");
            }
            ExperimentEvent::TrainingFinished { delivered } => {
                println!("[experiment] training finished ({delivered} checkpoints)");
            }
        }
    }
}
