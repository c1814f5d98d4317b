//! Curium Core
//!
//! Config primitives for experiment orchestration:
//! - Defining typed, defaulted experiment configs (`ExperimentConfig`)
//! - Deriving command-line flags from config fields (`ConfigSchema`)
//! - Naming the on-disk results layout of a run (`ResultsLayout`)

pub mod config;
pub mod error;
pub mod layout;

pub use config::{BaseConfig, ConfigField, ConfigSchema, ExperimentConfig};
pub use error::{ConfigError, ConfigResult};
pub use layout::ResultsLayout;
