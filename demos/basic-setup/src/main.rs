//! Basic experiment setup with Curium.
//!
//! Shows the three pieces every experiment consists of:
//! 1. a config struct,
//! 2. a `TrainingExecutor`,
//! 3. an `EvaluationExecutor`,
//!
//! and a `main` that hands them to [`Experiment`].

use async_trait::async_trait;
use curium_core::{BaseConfig, ConfigField, ExperimentConfig};
use curium_experiment::{
    CheckpointId, CheckpointSender, EvaluationExecutor, Experiment, ExperimentResult,
    TrainingExecutor,
};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Sentinel shown when the user never sets `--my-conf`.
const DEFAULT_MY_CONF: &str = "Unknown";

#[derive(Debug, Clone, Serialize)]
struct MyConfig {
    #[serde(flatten)]
    base: BaseConfig,
    /// Some configuration of the experiment that the user defines as a command-line arg.
    my_conf: String,
}

impl Default for MyConfig {
    fn default() -> Self {
        Self { base: BaseConfig::default(), my_conf: DEFAULT_MY_CONF.to_string() }
    }
}

impl ExperimentConfig for MyConfig {
    fn base(&self) -> &BaseConfig {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseConfig {
        &mut self.base
    }

    fn fields() -> Vec<ConfigField<Self>> {
        vec![ConfigField::new::<String, _>(
            "my_conf",
            "Some configuration of your experiment",
            |conf, value| conf.my_conf = value,
        )]
    }
}

struct MyTrainingExecutor;

#[async_trait]
impl TrainingExecutor<MyConfig> for MyTrainingExecutor {
    async fn run_training(&self, conf: &MyConfig, ckpt: &CheckpointSender) -> ExperimentResult<()> {
        println!("This is where the actual training procedure is implemented.");
        println!("The user-defined config is passed in as `conf`.");
        println!(
            "For example, the config my_conf (with arg --my-conf) was set to '{}'.",
            conf.my_conf
        );

        println!();

        println!("Every now and then (usually after every training epoch), we create a training checkpoint,");
        println!("which should be stored in the results directory.");
        println!("For this experiment, the results directory was chosen to be:");
        println!("{}", conf.base().results_dir.display());

        println!();

        println!("To deliver a checkpoint, and kick off evaluation, we use the checkpoint sender.");
        println!("As an example, we deliver a checkpoint 'test.ckpt'.");
        println!("(Usually, we would of course create the checkpoint file in the results directory first.)");

        ckpt.deliver("test.ckpt")?;

        println!();

        println!("Done.");
        Ok(())
    }
}

struct MyEvaluationExecutor;

#[async_trait]
impl EvaluationExecutor<MyConfig> for MyEvaluationExecutor {
    async fn run_evaluation(&self, _conf: &MyConfig, ckpt: &CheckpointId) -> ExperimentResult<()> {
        println!("This is where the evaluation procedure is implemented.");
        println!("The checkpoint that the evaluation was launched for is passed in as `ckpt`.");
        println!("In this particular case, the processed checkpoint is '{ckpt}'.");

        println!();

        println!("Done.");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Experiment::new(
        MyTrainingExecutor,
        MyEvaluationExecutor,
        "basic-setup",
        "Illustrates the basic setup of an experiment using Curium.",
    )
    .run()
    .await?;

    Ok(())
}
