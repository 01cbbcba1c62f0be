//! Captured environment snapshot.
//!
//! Profile resolution reads every setting through an `Env` so that it is a pure
//! function of its inputs. The process builds one from `std::env` after loading
//! `.env`; tests build their own from literal pairs.

use std::{collections::HashMap, str::FromStr};

use crate::server::error::config::ConfigError;

#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Captures the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();

        Self { vars }
    }

    /// Builds a snapshot from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the raw value of `key`, which may be empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns the value of `key` only when it is set and not blank.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    /// Returns the value of `key`, or `default` when unset.
    ///
    /// A variable that is set to an empty string is returned as empty, matching the
    /// usual getenv-with-default semantics.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Returns true when any of `keys` is set to a non-empty value.
    pub fn any_set(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.non_empty(k).is_some())
    }

    /// Parses the value of `key`, falling back to `default` when unset or blank.
    ///
    /// # Arguments
    /// - `key` - Environment variable name
    /// - `default` - Value used when the variable is absent
    ///
    /// # Returns
    /// - `Ok(T)` - Parsed value or the default
    /// - `Err(ConfigError::InvalidValue)` - Variable is set but does not parse as `T`
    pub fn parse_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.non_empty(key) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidValue {
                    key,
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(default),
        }
    }

    /// Parses a boolean flag such as `AUTO_MIGRATE`.
    ///
    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off` in any case.
    pub fn flag_or(&self, key: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Some(raw) = self.non_empty(key) else {
            return Ok(default);
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key,
                value: raw.to_string(),
                reason: "expected a boolean".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_not_non_empty() {
        let env = Env::from_pairs([("SECRET_KEY", "")]);

        assert_eq!(env.get("SECRET_KEY"), Some(""));
        assert_eq!(env.non_empty("SECRET_KEY"), None);
        assert_eq!(env.get_or("SECRET_KEY", "fallback"), "");
        assert_eq!(env.get_or("MISSING", "fallback"), "fallback");
    }

    #[test]
    fn parse_or_reports_the_offending_key() {
        let env = Env::from_pairs([("PORT", "eighty")]);

        let err = env.parse_or::<u16>("PORT", 5000).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
        assert_eq!(Env::default().parse_or::<u16>("PORT", 5000), Ok(5000));
    }

    #[test]
    fn flag_accepts_common_spellings() {
        let env = Env::from_pairs([("A", "Yes"), ("B", "0"), ("C", "maybe")]);

        assert_eq!(env.flag_or("A", false), Ok(true));
        assert_eq!(env.flag_or("B", true), Ok(false));
        assert!(env.flag_or("C", false).is_err());
        assert_eq!(env.flag_or("D", true), Ok(true));
    }
}
