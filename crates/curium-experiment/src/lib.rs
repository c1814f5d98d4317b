//! Curium Experiment
//!
//! The experiment runner and its executor contracts:
//! - Implementing the training and evaluation callbacks (`TrainingExecutor`, `EvaluationExecutor`)
//! - Delivering checkpoints from training to the runner (`CheckpointSender`)
//! - Observing run lifecycle events (`EventSink`)
//! - Wiring it all together (`Experiment`)

pub mod checkpoint;
pub mod error;
pub mod events;
pub mod executor;
pub mod experiment;

pub use checkpoint::{CheckpointId, CheckpointSender};
pub use error::{ExperimentError, ExperimentResult};
pub use events::{EventSink, ExperimentEvent, StdoutEventSink};
pub use executor::{EvaluationExecutor, TrainingExecutor};
pub use experiment::Experiment;
