//! Experiment configuration: typed fields, defaults, and command-line derivation.
//!
//! A config is a plain struct embedding [`BaseConfig`] and implementing
//! [`ExperimentConfig`]. Every field has a default, so the config is valid
//! before any parsing occurs; command-line flags are derived from the
//! declared fields and applied over the defaults.

pub mod base;
pub mod field;
pub mod schema;

pub use base::BaseConfig;
pub use field::ConfigField;
pub use schema::ConfigSchema;

use serde::Serialize;

/// A user-defined experiment configuration.
///
/// Implementors embed a [`BaseConfig`] for the fields every experiment
/// shares and list their own settable fields in [`fields`](Self::fields).
/// The `Default` impl must supply a value for every field.
pub trait ExperimentConfig: Default + Serialize + Send + Sync + 'static {
    /// The base fields shared by all experiments.
    fn base(&self) -> &BaseConfig;

    /// Mutable access to the base fields.
    fn base_mut(&mut self) -> &mut BaseConfig;

    /// User-defined settable fields, in declaration order.
    fn fields() -> Vec<ConfigField<Self>>;
}
