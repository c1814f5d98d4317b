use crate::error::{ConfigError, ConfigResult};
use std::fmt;
use std::str::FromStr;

type Setter<C> = Box<dyn Fn(&mut C, &str) -> ConfigResult<()> + Send + Sync>;

/// One settable field of an experiment config.
///
/// A field couples a name with a typed setter: the raw command-line value is
/// parsed into the declared type and assigned into the config. Parse failure
/// surfaces as [`ConfigError::InvalidValue`].
pub struct ConfigField<C> {
    name: &'static str,
    help: &'static str,
    set: Setter<C>,
}

impl<C> ConfigField<C> {
    /// Creates a field named `name` whose values parse into `T`.
    pub fn new<T, F>(name: &'static str, help: &'static str, assign: F) -> Self
    where
        T: FromStr,
        T::Err: fmt::Display,
        F: Fn(&mut C, T) + Send + Sync + 'static,
    {
        Self {
            name,
            help,
            set: Box::new(move |conf, raw| {
                let value = raw.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                    field: name.to_string(),
                    message: e.to_string(),
                })?;
                assign(conf, value);
                Ok(())
            }),
        }
    }

    /// The field name as declared (snake_case).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Help text shown for the derived flag.
    #[must_use]
    pub fn help(&self) -> &'static str {
        self.help
    }

    /// The long command-line flag derived from the field name
    /// (`my_conf` becomes `my-conf`).
    #[must_use]
    pub fn flag(&self) -> String {
        self.name.replace('_', "-")
    }

    /// Parses `raw` and assigns the result into `conf`.
    pub fn apply(&self, conf: &mut C, raw: &str) -> ConfigResult<()> {
        (self.set)(conf, raw)
    }
}

impl<C> fmt::Debug for ConfigField<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigField").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Plain {
        text: String,
        count: u32,
    }

    #[test]
    fn test_string_setter_is_identity() {
        let field =
            ConfigField::new::<String, _>("text", "some text", |conf: &mut Plain, v| conf.text = v);

        let mut conf = Plain::default();
        field.apply(&mut conf, "hello world").unwrap();
        assert_eq!(conf.text, "hello world");
    }

    #[test]
    fn test_typed_setter_coerces() {
        let field =
            ConfigField::new::<u32, _>("count", "a count", |conf: &mut Plain, v| conf.count = v);

        let mut conf = Plain::default();
        field.apply(&mut conf, "42").unwrap();
        assert_eq!(conf.count, 42);
    }

    #[test]
    fn test_coercion_failure_names_the_field() {
        let field =
            ConfigField::new::<u32, _>("count", "a count", |conf: &mut Plain, v| conf.count = v);

        let mut conf = Plain::default();
        let err = field.apply(&mut conf, "forty-two").unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, "count"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_flag_derivation() {
        let field =
            ConfigField::new::<String, _>("my_conf", "...", |conf: &mut Plain, v| conf.text = v);
        assert_eq!(field.flag(), "my-conf");
    }
}
