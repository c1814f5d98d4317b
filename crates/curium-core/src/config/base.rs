use crate::config::ExperimentConfig;
use crate::config::field::ConfigField;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default results directory, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Fields every experiment shares, embedded in user configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseConfig {
    /// Directory where the run stores its outputs (checkpoints, config snapshot).
    pub results_dir: PathBuf,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self { results_dir: PathBuf::from(DEFAULT_RESULTS_DIR) }
    }
}

/// Settable fields contributed by [`BaseConfig`] to every schema.
pub(crate) fn base_fields<C: ExperimentConfig>() -> Vec<ConfigField<C>> {
    vec![ConfigField::new::<PathBuf, _>(
        "results_dir",
        "Directory where results of the experiment are stored",
        |conf, value| conf.base_mut().results_dir = value,
    )]
}
