//! The experiment runner.
//!
//! An [`Experiment`] wires a config type, a training executor, and an
//! evaluation executor into one run: parse args → run training → evaluate
//! every checkpoint the training code delivers, in delivery order.

use crate::checkpoint;
use crate::error::ExperimentResult;
use crate::events::{EventSink, ExperimentEvent, StdoutEventSink};
use crate::executor::{EvaluationExecutor, TrainingExecutor};
use curium_core::{ConfigError, ConfigSchema, ExperimentConfig, ResultsLayout};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

pub struct Experiment<C, T, E> {
    training: T,
    evaluation: E,
    name: String,
    about: String,
    sink: Arc<dyn EventSink>,
    _config: PhantomData<fn() -> C>,
}

impl<C, T, E> Experiment<C, T, E>
where
    C: ExperimentConfig,
    T: TrainingExecutor<C> + 'static,
    E: EvaluationExecutor<C>,
{
    /// Creates an experiment. `name` is the invocation name printed in the
    /// command-line synopsis; `about` is the app's help text.
    #[must_use]
    pub fn new(
        training: T,
        evaluation: E,
        name: impl Into<String>,
        about: impl Into<String>,
    ) -> Self {
        Self {
            training,
            evaluation,
            name: name.into(),
            about: about.into(),
            sink: Arc::new(StdoutEventSink),
            _config: PhantomData,
        }
    }

    /// Replaces the event sink the run reports to.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Parses the process arguments into the config and runs the experiment.
    ///
    /// Command-line errors (including `--help`) terminate the process the way
    /// any clap binary does.
    pub async fn run(self) -> ExperimentResult<()> {
        let schema = ConfigSchema::<C>::new()?;
        let conf = match schema.parse(&self.name, &self.about) {
            Ok(conf) => conf,
            Err(ConfigError::Cli(err)) => err.exit(),
            Err(err) => return Err(err.into()),
        };
        self.run_with_config(conf).await
    }

    /// Runs the experiment with a pre-built config.
    ///
    /// Ensures the results layout exists, snapshots the resolved config to
    /// `config.json`, runs training, and evaluates each delivered checkpoint.
    /// Succeeds only when training and every evaluation succeed.
    pub async fn run_with_config(self, conf: C) -> ExperimentResult<()> {
        let layout = ResultsLayout::for_config(&conf);
        layout.ensure_dirs()?;
        std::fs::write(layout.config_snapshot_path(), serde_json::to_string_pretty(&conf)?)?;
        info!(results_dir = %layout.root().display(), "experiment starting");

        let conf = Arc::new(conf);
        let (sender, mut deliveries) = checkpoint::channel();

        self.sink.on_event(ExperimentEvent::TrainingStarted);
        let training = self.training;
        let training_conf = Arc::clone(&conf);
        // The sender moves into the task, so the channel closes when training
        // returns; that is what ends the delivery loop below.
        let training_task =
            tokio::spawn(async move { training.run_training(&training_conf, &sender).await });

        let mut delivered: u64 = 0;
        while let Some(ckpt) = deliveries.recv().await {
            delivered += 1;
            debug!(ckpt = %ckpt, "checkpoint delivered");
            self.sink.on_event(ExperimentEvent::CheckpointDelivered { ckpt: ckpt.to_string() });

            self.sink.on_event(ExperimentEvent::EvaluationStarted { ckpt: ckpt.to_string() });
            if let Err(err) = self.evaluation.run_evaluation(&conf, &ckpt).await {
                training_task.abort();
                return Err(err);
            }
            self.sink.on_event(ExperimentEvent::EvaluationFinished { ckpt: ckpt.to_string() });
        }

        training_task.await??;
        self.sink.on_event(ExperimentEvent::TrainingFinished { delivered });
        info!(delivered, "experiment finished");
        Ok(())
    }
}
