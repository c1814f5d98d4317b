use crate::config::ExperimentConfig;
use crate::config::base;
use crate::config::field::ConfigField;
use crate::error::{ConfigError, ConfigResult};
use clap::{Arg, ArgAction, Command};
use std::collections::HashSet;
use std::ffi::OsString;
use tracing::debug;

/// Derives a command-line interface from a config type's declared fields.
///
/// The schema is the base fields plus the user fields, in that order. Each
/// field becomes one long flag taking a value (`my_conf` → `--my-conf VALUE`);
/// parsed values are applied over `C::default()`, so unset flags keep their
/// defaults.
pub struct ConfigSchema<C: ExperimentConfig> {
    fields: Vec<ConfigField<C>>,
}

impl<C: ExperimentConfig> ConfigSchema<C> {
    /// Builds the schema for `C`.
    ///
    /// Fails with [`ConfigError::DuplicateField`] if a user field reuses a
    /// name, including the names of the base fields.
    pub fn new() -> ConfigResult<Self> {
        let mut fields = base::base_fields::<C>();
        fields.extend(C::fields());

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(ConfigError::DuplicateField(field.name().to_string()));
            }
        }

        Ok(Self { fields })
    }

    /// The clap command for this schema. `name` is the invocation name shown
    /// in the synopsis; `about` is the app's help text.
    #[must_use]
    pub fn command(&self, name: &str, about: &str) -> Command {
        let mut cmd = Command::new(name.to_string()).about(about.to_string());
        for field in &self.fields {
            cmd = cmd.arg(
                Arg::new(field.name())
                    .long(field.flag())
                    .help(field.help())
                    .value_name("VALUE")
                    .action(ArgAction::Set),
            );
        }
        cmd
    }

    /// Parses `argv` into a config, starting from `C::default()`.
    pub fn parse_from<I, S>(&self, name: &str, about: &str, argv: I) -> ConfigResult<C>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone,
    {
        let matches = self.command(name, about).try_get_matches_from(argv)?;
        let mut conf = C::default();
        for field in &self.fields {
            if let Some(raw) = matches.get_one::<String>(field.name()) {
                debug!(field = field.name(), value = %raw, "applying config field");
                field.apply(&mut conf, raw)?;
            }
        }
        Ok(conf)
    }

    /// Parses the process arguments into a config.
    pub fn parse(&self, name: &str, about: &str) -> ConfigResult<C> {
        self.parse_from(name, about, std::env::args_os())
    }
}
