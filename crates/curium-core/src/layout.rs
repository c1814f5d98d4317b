use crate::config::ExperimentConfig;
use crate::error::ConfigResult;
use std::path::{Path, PathBuf};

/// Filesystem layout for the outputs of a single experiment run.
///
/// Everything a run writes lives under the config's results directory:
/// `checkpoints/` is the conventional place for training artifacts, and
/// `config.json` holds the resolved config the run started with.
#[derive(Debug, Clone)]
pub struct ResultsLayout {
    root: PathBuf,
}

impl ResultsLayout {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Creates a layout rooted at the config's results directory.
    #[must_use]
    pub fn for_config<C: ExperimentConfig>(conf: &C) -> Self {
        Self::new(conf.base().results_dir.clone())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn checkpoints_dir(&self) -> PathBuf {
        self.root.join("checkpoints")
    }

    #[must_use]
    pub fn config_snapshot_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    pub fn ensure_dirs(&self) -> ConfigResult<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.checkpoints_dir())?;
        Ok(())
    }
}
